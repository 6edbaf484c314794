//! Positional-record to named-entity mapping.
//!
//! The ledger returns fixed-order records; the authoritative response for
//! every operation is built from these, never from a submission receipt.

use crate::domain::model::{Company, CompanyRole, Drug, PurchaseOrder, Shipment, ShipmentStatus};
use crate::foundation::{GatewayError, PositionalRecord, Result};
use serde_json::Value;

/// `[companyID, name, location, roleOrdinal, hierarchyKey]`
pub fn company_from_record(record: &PositionalRecord) -> Result<Company> {
    Ok(Company {
        company_id: field_str(record, 0, "companyID")?,
        name: field_str(record, 1, "name")?,
        location: field_str(record, 2, "location")?,
        organisation_role: CompanyRole::from_ordinal(field_u64(record, 3, "role")?)?,
        hierarchy_key: field_u64(record, 4, "hierarchyKey")?,
    })
}

/// `[productId, name, manufacturer, manufacturingDate, expiryDate, owner, shipment]`
pub fn drug_from_record(record: &PositionalRecord) -> Result<Drug> {
    Ok(Drug {
        product_id: field_str(record, 0, "productId")?,
        name: field_str(record, 1, "name")?,
        manufacturer: field_str(record, 2, "manufacturer")?,
        manufacturing_date: field_str(record, 3, "manufacturingDate")?,
        expiry_date: field_str(record, 4, "expiryDate")?,
        owner: field_str(record, 5, "owner")?,
        shipment: field_value(record, 6, "shipment")?,
    })
}

/// `[poId, drugName, buyer, quantity, seller]`
pub fn purchase_order_from_record(record: &PositionalRecord) -> Result<PurchaseOrder> {
    Ok(PurchaseOrder {
        po_id: field_str(record, 0, "poId")?,
        drug_name: field_str(record, 1, "drugName")?,
        buyer: field_str(record, 2, "buyer")?,
        quantity: field_u64(record, 3, "quantity")?,
        seller: field_str(record, 4, "seller")?,
    })
}

/// `[shipmentID, creator, assets, transporter, statusOrdinal]`
pub fn shipment_from_record(record: &PositionalRecord) -> Result<Shipment> {
    Ok(Shipment {
        shipment_id: field_str(record, 0, "shipmentID")?,
        creator: field_str(record, 1, "creator")?,
        assets: field_str_array(record, 2, "assets")?,
        transporter: field_str(record, 3, "transporter")?,
        status: ShipmentStatus(field_u64(record, 4, "status")?),
    })
}

fn field_value(record: &PositionalRecord, index: usize, field: &str) -> Result<Value> {
    record
        .get(index)
        .cloned()
        .ok_or_else(|| GatewayError::decode(field, format!("record has no position {}", index)))
}

fn field_str(record: &PositionalRecord, index: usize, field: &str) -> Result<String> {
    let value = field_value(record, index, field)?;
    value
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| GatewayError::decode(field, format!("expected string at position {}, got {}", index, value)))
}

/// Integers arrive as JSON numbers or as decimal strings depending on how the
/// ledger encodes its numeric word size; both are accepted.
fn field_u64(record: &PositionalRecord, index: usize, field: &str) -> Result<u64> {
    let value = field_value(record, index, field)?;
    if let Some(n) = value.as_u64() {
        return Ok(n);
    }
    if let Some(s) = value.as_str() {
        if let Ok(n) = s.trim().parse::<u64>() {
            return Ok(n);
        }
    }
    Err(GatewayError::decode(field, format!("expected integer at position {}, got {}", index, value)))
}

fn field_str_array(record: &PositionalRecord, index: usize, field: &str) -> Result<Vec<String>> {
    let value = field_value(record, index, field)?;
    let items = value
        .as_array()
        .ok_or_else(|| GatewayError::decode(field, format!("expected array at position {}, got {}", index, value)))?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(|s| s.to_string())
                .ok_or_else(|| GatewayError::decode(field, format!("expected string element, got {}", item)))
        })
        .collect()
}
