//! Request payloads for the gateway surface.
//!
//! Validation runs before any remote call: a malformed payload never reaches
//! simulate, submit, or query. Each request also knows its ledger argument
//! order and the key its canonical read-back uses.

use crate::domain::model::CompanyRole;
use crate::foundation::{GatewayError, Result};
use serde::Deserialize;
use serde_json::{json, Value};

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GatewayError::validation(field, "must be a non-empty string"));
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct RegisterCompanyRequest {
    #[serde(rename = "companyCRN")]
    pub company_crn: String,
    #[serde(rename = "companyName")]
    pub company_name: String,
    pub location: String,
    pub role: u64,
}

impl RegisterCompanyRequest {
    pub fn validate(&self) -> Result<()> {
        require_text("companyCRN", &self.company_crn)?;
        require_text("companyName", &self.company_name)?;
        require_text("location", &self.location)?;
        CompanyRole::from_ordinal(self.role)
            .map_err(|_| GatewayError::validation("role", format!("unknown role ordinal {}", self.role)))?;
        Ok(())
    }

    pub fn ledger_args(&self) -> Vec<Value> {
        vec![json!(self.company_crn), json!(self.company_name), json!(self.location), json!(self.role)]
    }

    pub fn read_key(&self) -> Vec<Value> {
        vec![json!(self.company_crn)]
    }
}

#[derive(Debug, Deserialize)]
pub struct AddDrugRequest {
    #[serde(rename = "drugName")]
    pub drug_name: String,
    #[serde(rename = "serialNumber")]
    pub serial_number: String,
    #[serde(rename = "mafDate")]
    pub manufacturing_date: String,
    #[serde(rename = "expDate")]
    pub expiry_date: String,
    #[serde(rename = "companyCRN")]
    pub company_crn: String,
}

impl AddDrugRequest {
    pub fn validate(&self) -> Result<()> {
        require_text("drugName", &self.drug_name)?;
        require_text("serialNumber", &self.serial_number)?;
        require_text("mafDate", &self.manufacturing_date)?;
        require_text("expDate", &self.expiry_date)?;
        require_text("companyCRN", &self.company_crn)
    }

    pub fn ledger_args(&self) -> Vec<Value> {
        vec![
            json!(self.drug_name),
            json!(self.serial_number),
            json!(self.manufacturing_date),
            json!(self.expiry_date),
            json!(self.company_crn),
        ]
    }

    pub fn read_key(&self) -> Vec<Value> {
        vec![json!(self.drug_name), json!(self.serial_number)]
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatePoRequest {
    #[serde(rename = "buyerCRN")]
    pub buyer_crn: String,
    #[serde(rename = "sellerCRN")]
    pub seller_crn: String,
    #[serde(rename = "drugName")]
    pub drug_name: String,
    pub quantity: u64,
}

impl CreatePoRequest {
    pub fn validate(&self) -> Result<()> {
        require_text("buyerCRN", &self.buyer_crn)?;
        require_text("sellerCRN", &self.seller_crn)?;
        require_text("drugName", &self.drug_name)?;
        if self.quantity == 0 {
            return Err(GatewayError::validation("quantity", "must be at least 1"));
        }
        Ok(())
    }

    pub fn ledger_args(&self) -> Vec<Value> {
        vec![json!(self.buyer_crn), json!(self.seller_crn), json!(self.drug_name), json!(self.quantity)]
    }

    pub fn read_key(&self) -> Vec<Value> {
        vec![json!(self.buyer_crn), json!(self.drug_name)]
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateShipmentRequest {
    #[serde(rename = "buyerCRN")]
    pub buyer_crn: String,
    #[serde(rename = "drugName")]
    pub drug_name: String,
    #[serde(rename = "listOfAssets")]
    pub list_of_assets: Vec<String>,
    #[serde(rename = "transporterCRN")]
    pub transporter_crn: String,
}

impl CreateShipmentRequest {
    pub fn validate(&self) -> Result<()> {
        require_text("buyerCRN", &self.buyer_crn)?;
        require_text("drugName", &self.drug_name)?;
        require_text("transporterCRN", &self.transporter_crn)?;
        if self.list_of_assets.is_empty() {
            return Err(GatewayError::validation("listOfAssets", "must contain at least one asset"));
        }
        for asset in &self.list_of_assets {
            require_text("listOfAssets", asset)?;
        }
        Ok(())
    }

    pub fn ledger_args(&self) -> Vec<Value> {
        vec![json!(self.buyer_crn), json!(self.drug_name), json!(self.list_of_assets), json!(self.transporter_crn)]
    }

    pub fn read_key(&self) -> Vec<Value> {
        vec![json!(self.buyer_crn), json!(self.drug_name)]
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateShipmentRequest {
    #[serde(rename = "buyerCRN")]
    pub buyer_crn: String,
    #[serde(rename = "drugName")]
    pub drug_name: String,
    #[serde(rename = "transporterCRN")]
    pub transporter_crn: String,
}

impl UpdateShipmentRequest {
    pub fn validate(&self) -> Result<()> {
        require_text("buyerCRN", &self.buyer_crn)?;
        require_text("drugName", &self.drug_name)?;
        require_text("transporterCRN", &self.transporter_crn)
    }

    pub fn ledger_args(&self) -> Vec<Value> {
        vec![json!(self.buyer_crn), json!(self.drug_name), json!(self.transporter_crn)]
    }

    pub fn read_key(&self) -> Vec<Value> {
        vec![json!(self.buyer_crn), json!(self.drug_name)]
    }
}

#[derive(Debug, Deserialize)]
pub struct RetailDrugRequest {
    #[serde(rename = "drugName")]
    pub drug_name: String,
    #[serde(rename = "serialNumber")]
    pub serial_number: String,
    #[serde(rename = "retailerCRN")]
    pub retailer_crn: String,
    #[serde(rename = "customerAadhar")]
    pub customer_aadhar: String,
}

impl RetailDrugRequest {
    pub fn validate(&self) -> Result<()> {
        require_text("drugName", &self.drug_name)?;
        require_text("serialNumber", &self.serial_number)?;
        require_text("retailerCRN", &self.retailer_crn)?;
        require_text("customerAadhar", &self.customer_aadhar)
    }

    pub fn ledger_args(&self) -> Vec<Value> {
        vec![json!(self.drug_name), json!(self.serial_number), json!(self.retailer_crn), json!(self.customer_aadhar)]
    }

    pub fn read_key(&self) -> Vec<Value> {
        vec![json!(self.drug_name), json!(self.serial_number)]
    }
}

/// Key payload for the read-only provenance operations.
#[derive(Debug, Deserialize)]
pub struct DrugLookupRequest {
    #[serde(rename = "drugName")]
    pub drug_name: String,
    #[serde(rename = "serialNumber")]
    pub serial_number: String,
}

impl DrugLookupRequest {
    pub fn validate(&self) -> Result<()> {
        require_text("drugName", &self.drug_name)?;
        require_text("serialNumber", &self.serial_number)
    }

    pub fn read_key(&self) -> Vec<Value> {
        vec![json!(self.drug_name), json!(self.serial_number)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_company_rejects_unknown_role_ordinal() {
        let req = RegisterCompanyRequest {
            company_crn: "CRN1".to_string(),
            company_name: "Acme".to_string(),
            location: "Delhi".to_string(),
            role: 4,
        };
        let err = req.validate().expect_err("role out of range");
        assert_eq!(err.kind().as_str(), "ValidationError");
    }

    #[test]
    fn blank_fields_are_rejected() {
        let req = AddDrugRequest {
            drug_name: "Paracetamol".to_string(),
            serial_number: "  ".to_string(),
            manufacturing_date: "2024-01-01".to_string(),
            expiry_date: "2026-01-01".to_string(),
            company_crn: "CRN1".to_string(),
        };
        let err = req.validate().expect_err("blank serial");
        assert!(err.to_string().contains("serialNumber"));
    }

    #[test]
    fn empty_asset_list_is_rejected() {
        let req = CreateShipmentRequest {
            buyer_crn: "CRN2".to_string(),
            drug_name: "Paracetamol".to_string(),
            list_of_assets: Vec::new(),
            transporter_crn: "CRN9".to_string(),
        };
        let err = req.validate().expect_err("empty assets");
        assert!(err.to_string().contains("listOfAssets"));
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let req = CreatePoRequest {
            buyer_crn: "CRN2".to_string(),
            seller_crn: "CRN3".to_string(),
            drug_name: "Paracetamol".to_string(),
            quantity: 0,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn ledger_args_preserve_positional_order() {
        let req = RegisterCompanyRequest {
            company_crn: "CRN1".to_string(),
            company_name: "Acme".to_string(),
            location: "Delhi".to_string(),
            role: 0,
        };
        assert!(req.validate().is_ok());
        let args = req.ledger_args();
        assert_eq!(args[0], serde_json::json!("CRN1"));
        assert_eq!(args[3], serde_json::json!(0));
        assert_eq!(req.read_key(), vec![serde_json::json!("CRN1")]);
    }
}
