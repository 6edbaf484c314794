use crate::foundation::{GatewayError, Result};
use serde::Serialize;

/// Organisation role stored by the ledger as an ordinal.
///
/// Decoding is total and fails closed: an ordinal outside this table is a
/// `DecodeError`, never an unlabeled value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CompanyRole {
    Manufacturer,
    Distributor,
    Retailer,
    Transporter,
}

impl CompanyRole {
    pub fn from_ordinal(ordinal: u64) -> Result<Self> {
        match ordinal {
            0 => Ok(CompanyRole::Manufacturer),
            1 => Ok(CompanyRole::Distributor),
            2 => Ok(CompanyRole::Retailer),
            3 => Ok(CompanyRole::Transporter),
            other => Err(GatewayError::decode("role", format!("unknown role ordinal {}", other))),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompanyRole::Manufacturer => "Manufacturer",
            CompanyRole::Distributor => "Distributor",
            CompanyRole::Retailer => "Retailer",
            CompanyRole::Transporter => "Transporter",
        }
    }
}

/// Shipment status as an opaque ordinal.
///
/// The ledger's status label vocabulary is not part of the remote interface,
/// so the ordinal is surfaced as-is instead of guessing labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ShipmentStatus(pub u64);

#[derive(Clone, Debug, Serialize)]
pub struct Company {
    #[serde(rename = "companyID")]
    pub company_id: String,
    pub name: String,
    pub location: String,
    #[serde(rename = "organisationRole")]
    pub organisation_role: CompanyRole,
    #[serde(rename = "hierarchyKey")]
    pub hierarchy_key: u64,
}

#[derive(Clone, Debug, Serialize)]
pub struct Drug {
    #[serde(rename = "productId")]
    pub product_id: String,
    pub name: String,
    pub manufacturer: String,
    #[serde(rename = "manufacturingDate")]
    pub manufacturing_date: String,
    #[serde(rename = "expiryDate")]
    pub expiry_date: String,
    pub owner: String,
    /// Ledger-side reference; passed through verbatim (single reference,
    /// list of references, or null depending on the drug's shipment history).
    pub shipment: serde_json::Value,
}

#[derive(Clone, Debug, Serialize)]
pub struct PurchaseOrder {
    #[serde(rename = "poId")]
    pub po_id: String,
    #[serde(rename = "drugName")]
    pub drug_name: String,
    pub buyer: String,
    pub quantity: u64,
    pub seller: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct Shipment {
    #[serde(rename = "shipmentID")]
    pub shipment_id: String,
    pub creator: String,
    pub assets: Vec<String>,
    pub transporter: String,
    pub status: ShipmentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_decode_fails_closed() {
        assert_eq!(CompanyRole::from_ordinal(0).expect("manufacturer"), CompanyRole::Manufacturer);
        assert_eq!(CompanyRole::from_ordinal(3).expect("transporter"), CompanyRole::Transporter);
        let err = CompanyRole::from_ordinal(4).expect_err("out of range");
        assert_eq!(err.kind().as_str(), "DecodeError");
    }

    #[test]
    fn role_serializes_as_label() {
        let json = serde_json::to_value(CompanyRole::Distributor).expect("serialize");
        assert_eq!(json, serde_json::json!("Distributor"));
    }

    #[test]
    fn shipment_status_stays_an_ordinal() {
        let json = serde_json::to_value(ShipmentStatus(2)).expect("serialize");
        assert_eq!(json, serde_json::json!(2));
    }
}
