use serde::Serialize;

/// Output of one invocation: both hash strings plus the password length in bytes.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct HashRecord {
    type8: String,
    type9: String,
    password_len: usize,
}

impl HashRecord {
    pub fn new(type8: String, type9: String, password_len: usize) -> Self {
        Self {
            type8,
            type9,
            password_len,
        }
    }

    pub fn type8(&self) -> &str {
        &self.type8
    }

    pub fn type9(&self) -> &str {
        &self.type9
    }

    pub fn password_len(&self) -> usize {
        self.password_len
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
