//! Static export of the whole site.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::{
    application::{error::AppError, page::PageService},
    infra::error::InfraError,
};

/// Files written by [`build_site`], in catalogue order.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub written: Vec<PathBuf>,
}

/// File name a page is exported under.
pub fn output_file_name(slug: &str) -> String {
    format!("{slug}.html")
}

/// Render every catalogue page into `out_dir` as `<slug>.html`.
pub fn build_site(service: &PageService, out_dir: &Path) -> Result<BuildReport, AppError> {
    if out_dir.exists() && !out_dir.is_dir() {
        return Err(InfraError::configuration(format!(
            "output path `{}` exists and is not a directory",
            out_dir.display()
        ))
        .into());
    }
    fs::create_dir_all(out_dir).map_err(|err| AppError::from(InfraError::Io(err)))?;

    let mut report = BuildReport::default();
    for slug in service.slugs() {
        let document = service.render_required(slug)?;
        let path = out_dir.join(output_file_name(slug));
        fs::write(&path, document.as_bytes()).map_err(|err| AppError::from(InfraError::Io(err)))?;
        info!(slug, path = %path.display(), bytes = document.len(), "wrote page");
        report.written.push(path);
    }

    Ok(report)
}
