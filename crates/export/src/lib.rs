//! Export helpers for CSV trajectories and JSON run summaries.

pub mod trajectory {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    const HEADER: &str = "t,x,vx,y,vy,z,vz,earth_distance,moon_distance";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard trajectory CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the trajectory exporter.
    #[derive(Debug, Clone)]
    pub struct Record {
        pub t: f64,
        pub state: [f64; 6],
        pub earth_distance: f64,
        pub moon_distance: f64,
    }

    impl Record {
        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            let [x, vx, y, vy, z, vz] = self.state;
            writeln!(
                writer,
                "{:.9},{:.9},{:.9},{:.9},{:.9},{:.9},{:.9},{:.9},{:.9}",
                self.t, x, vx, y, vy, z, vz, self.earth_distance, self.moon_distance,
            )
        }
    }
}

pub mod sidecar {
    use chrono::{SecondsFormat, Utc};
    use serde::{Deserialize, Serialize};
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    /// JSON summary written next to a trajectory export.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct RunSummary {
        pub scenario: String,
        pub earth_fraction: f64,
        pub moon_fraction: f64,
        pub step_size: f64,
        pub t_start: f64,
        pub t_end: f64,
        pub rows: usize,
        pub final_state: [f64; 6],
        #[serde(default)]
        pub generated_at: String,
    }

    /// Write the run summary as pretty-printed JSON, stamping the generation time.
    pub fn write_sidecar(path: &Path, summary: &mut RunSummary) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        summary.generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        to_writer_pretty(File::create(path)?, summary)?;
        Ok(())
    }
}
