use serde::{Deserialize, Serialize};

use adegamax_core::{Entity, Record, RecordId};

/// Supplier status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplierStatus {
    #[default]
    Active,
    Inactive,
}

/// Everything an operator submits through the supplier form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierFields {
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// Product categories this supplier provides (free text).
    pub category: String,
    #[serde(default)]
    pub status: SupplierStatus,
}

/// A supplier that products may reference by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    id: RecordId,
    #[serde(flatten)]
    fields: SupplierFields,
}

impl Supplier {
    pub fn id_typed(&self) -> RecordId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }

    pub fn contact_person(&self) -> &str {
        &self.fields.contact_person
    }

    pub fn phone(&self) -> &str {
        &self.fields.phone
    }

    pub fn email(&self) -> &str {
        &self.fields.email
    }

    pub fn address(&self) -> &str {
        &self.fields.address
    }

    pub fn category(&self) -> &str {
        &self.fields.category
    }

    pub fn status(&self) -> SupplierStatus {
        self.fields.status
    }

    pub fn fields(&self) -> &SupplierFields {
        &self.fields
    }
}

impl Entity for Supplier {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Record for Supplier {
    type Fields = SupplierFields;

    const KIND: &'static str = "supplier";

    fn from_fields(id: RecordId, fields: SupplierFields) -> Self {
        Self { id, fields }
    }

    fn apply_fields(&mut self, fields: SupplierFields) {
        self.fields = fields;
    }
}
