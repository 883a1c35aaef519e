//! Marker types for every backend resource, plus the few calls that are
//! specific to one of them.

use kar_core::CoreError;
use kar_core::costing::IndentCostBreakdown;
use kar_core::entities::{
    CustomerOrder, Grn, Indent, IndentDraft, IndentPayload, ManufactureArticle, Production,
    Product, PurchaseOrder, RawMaterial, RawMaterialBatch, TransitRegister, Unit, User, Vendor,
};
use kar_core::pagination::{ListParams, Page};
use kar_core::roles::Area;
use kar_core::workflow::DocumentKind;

use crate::error::ApiError;
use crate::resource::{Resource, WorkflowResource};
use crate::ApiClient;

macro_rules! resource {
    ($(#[$meta:meta])* $marker:ident, $path:literal, $name:literal, $area:expr, $record:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $marker;

        impl Resource for $marker {
            const PATH: &'static str = $path;
            const NAME: &'static str = $name;
            const AREA: Area = $area;
            type Record = $record;
        }
    };
}

macro_rules! workflow {
    ($marker:ident, $kind:expr) => {
        impl WorkflowResource for $marker {
            const KIND: DocumentKind = $kind;
        }
    };
}

resource!(
    /// Material requisitions.
    Indents, "/indent", "indent", Area::Indents, Indent
);
resource!(PurchaseOrders, "/purchase", "purchase order", Area::PurchaseOrders, PurchaseOrder);
resource!(
    /// Goods receipt notes.
    Grns, "/grns", "GRN", Area::Grns, Grn
);
resource!(RawMaterials, "/raw-material", "raw material", Area::Inventory, RawMaterial);
resource!(
    RawMaterialBatches,
    "/raw-material/raw-material-batch",
    "raw material batch",
    Area::Inventory,
    RawMaterialBatch
);
resource!(Productions, "/production", "production batch", Area::Production, Production);
resource!(Vendors, "/vendor", "vendor", Area::Vendors, Vendor);
resource!(Users, "/user", "user", Area::Users, User);
resource!(
    /// Units of measure.
    Units, "/unit", "unit", Area::Units, Unit
);
resource!(
    /// Gate entries for vehicles moving material in or out.
    TransitRegisters,
    "/transit_register",
    "transit entry",
    Area::TransitRegister,
    TransitRegister
);
resource!(CustomerOrders, "/customer-order", "customer order", Area::CustomerOrders, CustomerOrder);
resource!(
    ManufactureArticles,
    "/manufacture-articles",
    "article",
    Area::Catalog,
    ManufactureArticle
);
resource!(Products, "/product", "product", Area::Catalog, Product);

workflow!(Indents, DocumentKind::Indent);
workflow!(PurchaseOrders, DocumentKind::PurchaseOrder);
workflow!(Grns, DocumentKind::Grn);
workflow!(Productions, DocumentKind::Production);
workflow!(CustomerOrders, DocumentKind::CustomerOrder);

/// Query key the batch endpoint filters on.
pub const BATCH_MATERIAL_FILTER: &str = "rawMaterial";

impl ApiClient {
    /// Batches received for one raw material.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn batches_for_material(
        &self,
        material_id: &str,
        params: ListParams,
    ) -> Result<Page<RawMaterialBatch>, ApiError> {
        let params = params.with_filter(BATCH_MATERIAL_FILTER, material_id);
        self.list::<RawMaterialBatches>(&params).await
    }

    /// Create an indent, sending the form inputs together with every
    /// derived cost figure.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn create_indent(&self, draft: IndentDraft) -> Result<Indent, ApiError> {
        let payload = IndentPayload::from(draft);
        tracing::debug!(final_cost = %payload.breakdown.final_cost, "submitting indent");
        self.create::<Indents, _>(&payload).await
    }

    /// Apply a partial edit that touches indent costing.
    ///
    /// The stored indent is fetched, the edit is laid over its form fields,
    /// and the merged form goes back with freshly derived figures. Edit keys
    /// outside the costing form are passed through unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when the edit does not fit the indent
    /// form, otherwise [`ApiError`] on transport, status, or parse failure.
    pub async fn revise_indent(
        &self,
        id: &str,
        changes: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<(Indent, IndentCostBreakdown), ApiError> {
        let stored = self.get::<Indents>(id).await?;
        let draft = stored
            .revise(changes)
            .map_err(|e| CoreError::Validation(format!("indent {id}: {e}")))?;
        let payload = IndentPayload::from(draft);
        let breakdown = payload.breakdown.clone();

        let mut body = serde_json::to_value(&payload)
            .map_err(|e| ApiError::Parse(format!("indent {id}: {e}")))?;
        if let Some(body) = body.as_object_mut() {
            for (key, value) in changes {
                body.entry(key.clone()).or_insert_with(|| value.clone());
            }
        }

        tracing::debug!(id, final_cost = %breakdown.final_cost, "revising indent");
        let indent = self.update::<Indents, _>(id, &body).await?;
        Ok((indent, breakdown))
    }
}
