// src/domain/agent.rs

use crate::scraper::models::ApiAgent;

/// An agent as returned by the directory, with every field uppercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRecord {
    pub first_name: String,
    pub last_name: String,
    pub licence: String,
    pub mobile: String,
    pub home: String,
    pub email: String,
}

impl AgentRecord {
    pub fn from_api(agent: &ApiAgent) -> Self {
        let upper = |s: Option<&String>| s.map(|v| v.trim().to_uppercase()).unwrap_or_default();

        AgentRecord {
            first_name: upper(agent.first_name.as_ref()),
            last_name: upper(agent.last_name.as_ref()),
            licence: upper(agent.agent.as_ref().and_then(|a| a.agent_licence_no.as_ref())),
            mobile: upper(agent.contact_number.as_ref().and_then(|c| c.mobile.as_ref())),
            home: upper(agent.contact_number.as_ref().and_then(|c| c.home.as_ref())),
            email: upper(agent.email.as_ref()),
        }
    }

    pub fn has_phone(&self) -> bool {
        !self.mobile.is_empty() || !self.home.is_empty()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// `- FIRST LAST | LICENCE: X | MOBILE: M | HOME: H | EMAIL: E`
    pub fn to_roster_line(&self) -> String {
        format!(
            "- {} {} | LICENCE: {} | MOBILE: {} | HOME: {} | EMAIL: {}",
            self.first_name, self.last_name, self.licence, self.mobile, self.home, self.email
        )
    }
}

/// One roster line, as read back for the spreadsheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentRow {
    pub name: String,
    pub licence: String,
    pub mobile: String,
    pub home: String,
    pub email: String,
}

impl AgentRow {
    /// Returns `None` for lines that are not roster entries.
    pub fn parse_line(line: &str) -> Option<Self> {
        let body = line.trim().strip_prefix('-')?.trim();
        let parts: Vec<&str> = body.split('|').collect();
        if parts.len() < 4 {
            return None;
        }

        let labelled = |idx: usize, label: &str| {
            parts
                .get(idx)
                .and_then(|p| p.split_once(label))
                .map(|(_, v)| v.trim().to_string())
                .unwrap_or_default()
        };

        Some(AgentRow {
            name: parts[0].trim().to_string(),
            licence: labelled(1, "LICENCE:"),
            mobile: labelled(2, "MOBILE:"),
            home: labelled(3, "HOME:"),
            email: labelled(4, "EMAIL:"),
        })
    }
}
