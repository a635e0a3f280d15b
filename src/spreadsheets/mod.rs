pub mod agents_xlsx;

pub use agents_xlsx::export_agents_xlsx;
