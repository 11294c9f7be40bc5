//! Company Info Model

use serde::{Deserialize, Serialize};

/// Company information printed on report headers (one per branch)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// VAT registration number
    #[serde(default)]
    pub vat_reg_no: String,
}

impl CompanyInfo {
    /// Header lines under the company name, skipping blanks
    pub fn contact_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.address.trim().is_empty() {
            lines.push(self.address.trim().to_string());
        }
        if !self.phone.trim().is_empty() {
            lines.push(format!("Phone: {}", self.phone.trim()));
        }
        if !self.vat_reg_no.trim().is_empty() {
            lines.push(format!("VAT Reg: {}", self.vat_reg_no.trim()));
        }
        lines
    }
}
