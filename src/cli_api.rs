// CLI API module - parsing and report rendering for the command-line tool
use crate::trajectory_sampling::ArcSample;
use crate::trajectory_solver::LaunchSolution;
use nalgebra::Point3;
use serde::Serialize;
use std::fmt::{self, Write};

/// Failure while rendering a report
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to format report: {0}")]
    Format(#[from] fmt::Error),
}

// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// Parse `X,Y,Z` (whitespace around the numbers is allowed)
pub fn parse_point(s: &str) -> Result<Point3<f64>, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected X,Y,Z but got '{s}'"));
    }
    let mut coords = [0.0; 3];
    for (slot, part) in coords.iter_mut().zip(&parts) {
        let value: f64 = part
            .parse()
            .map_err(|_| format!("'{part}' is not a number"))?;
        if !value.is_finite() {
            return Err(format!("'{part}' is not a finite coordinate"));
        }
        *slot = value;
    }
    Ok(Point3::new(coords[0], coords[1], coords[2]))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Triple {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<&Point3<f64>> for Triple {
    fn from(p: &Point3<f64>) -> Self {
        Triple { x: p.x, y: p.y, z: p.z }
    }
}

// Solved launch, flattened for output
#[derive(Debug, Clone, Serialize)]
pub struct LaunchReport {
    pub source: Triple,
    pub destination: Triple,
    pub arc_factor: f64,
    pub motion: Triple,
    pub flight_time_s: f64,
    pub peak_height: f64,
    pub launch_height: f64,
    pub vertical_speed: f64,
    pub horizontal_distance: f64,
    pub horizontal_speed: f64,
}

impl LaunchReport {
    pub fn new(
        source: &Point3<f64>,
        destination: &Point3<f64>,
        arc_factor: f64,
        solution: &LaunchSolution,
    ) -> Self {
        let m = &solution.motion;
        Self {
            source: source.into(),
            destination: destination.into(),
            arc_factor,
            motion: Triple { x: m.x, y: m.y, z: m.z },
            flight_time_s: solution.flight_time_s,
            peak_height: solution.peak_height,
            launch_height: solution.launch_height,
            vertical_speed: solution.vertical_speed,
            horizontal_distance: solution.horizontal_distance,
            horizontal_speed: solution.horizontal_speed,
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, RenderError> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Csv => Ok(self.to_csv()?),
            OutputFormat::Table => Ok(self.to_table()?),
        }
    }

    fn to_csv(&self) -> Result<String, fmt::Error> {
        let mut out = String::from(
            "motion_x,motion_y,motion_z,flight_time_s,peak_height,horizontal_distance\n",
        );
        writeln!(
            out,
            "{},{},{},{},{},{}",
            self.motion.x,
            self.motion.y,
            self.motion.z,
            self.flight_time_s,
            self.peak_height,
            self.horizontal_distance
        )?;
        Ok(out)
    }

    fn to_table(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        writeln!(out, "LAUNCH SOLUTION")?;
        writeln!(out, "  Source:              ({:.3}, {:.3}, {:.3})", self.source.x, self.source.y, self.source.z)?;
        writeln!(out, "  Destination:         ({:.3}, {:.3}, {:.3})", self.destination.x, self.destination.y, self.destination.z)?;
        writeln!(out, "  Arc factor:          {:.3}", self.arc_factor)?;
        writeln!(out, "  Motion X:            {:.6}", self.motion.x)?;
        writeln!(out, "  Motion Y:            {:.6}", self.motion.y)?;
        writeln!(out, "  Motion Z:            {:.6}", self.motion.z)?;
        writeln!(out, "  Flight time:         {:.3} s", self.flight_time_s)?;
        writeln!(out, "  Peak height:         {:.3}", self.peak_height)?;
        writeln!(out, "  Horizontal distance: {:.3}", self.horizontal_distance)?;
        writeln!(out, "  Horizontal speed:    {:.3} blocks/s", self.horizontal_speed)?;
        writeln!(out, "  Vertical speed:      {:.3} blocks/s", self.vertical_speed)?;
        Ok(out)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SampleRow {
    pub time_s: f64,
    pub position: Triple,
    pub speed: f64,
    pub flags: Vec<&'static str>,
}

impl From<&ArcSample> for SampleRow {
    fn from(s: &ArcSample) -> Self {
        SampleRow {
            time_s: s.time_s,
            position: (&s.position).into(),
            speed: s.speed,
            flags: s.flags.iter().map(|f| f.as_str()).collect(),
        }
    }
}

// Launch plus previewed arc
#[derive(Debug, Clone, Serialize)]
pub struct SampleReport {
    pub launch: LaunchReport,
    pub samples: Vec<SampleRow>,
}

impl SampleReport {
    pub fn new(launch: LaunchReport, samples: &[ArcSample]) -> Self {
        Self {
            launch,
            samples: samples.iter().map(SampleRow::from).collect(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, RenderError> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Csv => Ok(self.to_csv()?),
            OutputFormat::Table => Ok(self.to_table()?),
        }
    }

    fn to_csv(&self) -> Result<String, fmt::Error> {
        let mut out = String::from("time_s,x,y,z,speed,flags\n");
        for row in &self.samples {
            writeln!(
                out,
                "{},{},{},{},{},{}",
                row.time_s,
                row.position.x,
                row.position.y,
                row.position.z,
                row.speed,
                row.flags.join("|")
            )?;
        }
        Ok(out)
    }

    fn to_table(&self) -> Result<String, fmt::Error> {
        let mut out = self.launch.to_table()?;
        writeln!(out)?;
        writeln!(out, "  Time (s) |     X     |     Y     |     Z     | Speed  | Flags")?;
        writeln!(out, "  ---------|-----------|-----------|-----------|--------|------")?;
        for row in &self.samples {
            writeln!(
                out,
                "  {:8.3} | {:9.3} | {:9.3} | {:9.3} | {:6.2} | {}",
                row.time_s,
                row.position.x,
                row.position.y,
                row.position.z,
                row.speed,
                row.flags.join(",")
            )?;
        }
        Ok(out)
    }
}
