use crate::config::AgentExportConfig;
use crate::db::roster::read_rows;
use crate::domain::AgentRow;
use crate::errors::ImportError;
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook};
use tracing::info;

const SHEET_NAME: &str = "Agents";
const HEADER_FILL: u32 = 0x4472C4;

// (header, column width)
const COLUMNS: [(&str, f64); 5] = [
    ("Name", 40.0),
    ("Licence", 15.0),
    ("Mobile", 25.0),
    ("Home", 25.0),
    ("Email", 35.0),
];

/// Builds the agents workbook in memory.
pub fn build_agents_workbook(agents: &[AgentRow]) -> Result<Vec<u8>, ImportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    for (col, (header, width)) in COLUMNS.iter().enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, *header, &header_format)?;
        worksheet.set_column_width(col, *width)?;
    }

    for (i, agent) in agents.iter().enumerate() {
        let r = (i + 1) as u32;
        let cells = [
            &agent.name,
            &agent.licence,
            &agent.mobile,
            &agent.home,
            &agent.email,
        ];
        for (col, value) in cells.iter().enumerate() {
            worksheet.write_string(r, col as u16, value.as_str())?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Reads the roster and writes it out as `.xlsx`. Returns the number of agents.
pub fn export_agents_xlsx(config: &AgentExportConfig) -> Result<usize, ImportError> {
    let agents = read_rows(&config.roster_path)?;
    info!("Found {} agents in {}", agents.len(), config.roster_path.display());

    let buffer = build_agents_workbook(&agents)?;
    std::fs::write(&config.dest_path, buffer)
        .map_err(|e| ImportError::io(&config.dest_path, e))?;

    info!("Excel file created: {}", config.dest_path.display());
    Ok(agents.len())
}
