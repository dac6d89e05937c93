// SPDX-License-Identifier: MIT
//
// Seller configuration printed on every invoice.

use serde::{Deserialize, Serialize};

/// Seller identity and boilerplate lines for the document header and footer.
///
/// The defaults are the Parts Corner shop profile; deployments override the
/// fields they need and keep the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Large brand title at the top of the first page.
    pub brand_name: String,
    /// Registered company name in the right-hand header block.
    pub legal_name: String,
    /// Street address line in the right-hand header block.
    pub address: String,
    /// Contact line (email / phone) in the right-hand header block.
    pub contact: String,
    /// First footer line.
    pub thank_you: String,
    /// Second footer line.
    pub payment_terms: String,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            brand_name: "PARTS CORNER".into(),
            legal_name: "Parts Corner Pvt. Ltd.".into(),
            address: "Beside Sanabil Supar Market, Gangachara, Rangpur 5410".into(),
            contact: "md.utshab85696@amail.com | 01792-703854".into(),
            thank_you: "Thank you for your business!".into(),
            payment_terms: "Payment Terms: Net 30 days".into(),
        }
    }
}
