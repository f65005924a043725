/// Interactive catalog browser
pub mod app;
pub mod events;
pub mod state;
pub mod theme;
pub mod view;

use crate::catalog::CpuCatalog;
use crate::Result;

/// Entry point for the browser
pub fn run(catalog: CpuCatalog) -> Result<()> {
    let app = app::App::new(catalog);
    app.run()
}
