use serde::Deserialize;

// response
//  └── agents[]
//       ├── first_name
//       ├── last_name
//       ├── email
//       ├── agent
//       │    └── agent_licence_no
//       └── contactNumber
//            ├── mobile
//            └── home

#[derive(Debug, Default, Deserialize)]
pub struct AgentsResponse {
    #[serde(default)]
    pub agents: Option<Vec<ApiAgent>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiAgent {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub agent: Option<AgentLicence>,
    #[serde(rename = "contactNumber")]
    pub contact_number: Option<ContactNumber>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AgentLicence {
    pub agent_licence_no: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContactNumber {
    pub mobile: Option<String>,
    pub home: Option<String>,
}

impl AgentsResponse {
    pub fn into_agents(self) -> Vec<ApiAgent> {
        self.agents.unwrap_or_default()
    }
}
