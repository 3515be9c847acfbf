use std::{process::Termination, time::Instant};

/// Metadata returned by [`build()`](crate::build::build) for a single page after a successful build.
#[derive(Debug)]
pub struct PageOutput {
    pub route: String,
    pub file_path: String,
}

/// Metadata returned by [`build()`](crate::build::build) after a successful build.
#[derive(Debug)]
pub struct BuildOutput {
    pub start_time: Instant,
    pub pages: Vec<PageOutput>,
}

impl BuildOutput {
    pub fn new(start_time: Instant) -> Self {
        Self {
            start_time,
            pages: Vec::new(),
        }
    }

    pub(crate) fn add_page(&mut self, route: String, file_path: String) {
        self.pages.push(PageOutput { route, file_path });
    }
}

impl Termination for BuildOutput {
    fn report(self) -> std::process::ExitCode {
        0.into()
    }
}
