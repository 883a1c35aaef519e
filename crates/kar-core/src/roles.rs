//! User roles and the page areas each role may open.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Role assigned to a back-office user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    Purchase,
    Store,
    Production,
    Sales,
    Accounts,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Purchase => "purchase",
            Self::Store => "store",
            Self::Production => "production",
            Self::Sales => "sales",
            Self::Accounts => "accounts",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" | "superadmin" | "super_admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "purchase" => Ok(Self::Purchase),
            "store" | "storekeeper" => Ok(Self::Store),
            "production" => Ok(Self::Production),
            "sales" => Ok(Self::Sales),
            "accounts" | "accountant" => Ok(Self::Accounts),
            _ => Err(CoreError::UnknownRole(s.to_string())),
        }
    }
}

/// A group of pages guarded together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Area {
    Dashboard,
    Indents,
    PurchaseOrders,
    Grns,
    Inventory,
    Production,
    CustomerOrders,
    Vendors,
    Catalog,
    Units,
    TransitRegister,
    Expenditure,
    Users,
}

impl Area {
    pub const ALL: [Self; 13] = [
        Self::Dashboard,
        Self::Indents,
        Self::PurchaseOrders,
        Self::Grns,
        Self::Inventory,
        Self::Production,
        Self::CustomerOrders,
        Self::Vendors,
        Self::Catalog,
        Self::Units,
        Self::TransitRegister,
        Self::Expenditure,
        Self::Users,
    ];

    /// Roles allowed into this area. [`Role::Admin`] is implied everywhere.
    #[must_use]
    pub const fn allowed_roles(self) -> &'static [Role] {
        use Role::{Accounts, Admin, Manager, Production, Purchase, Sales, Store};
        match self {
            Self::Dashboard => &[Admin, Manager, Purchase, Store, Production, Sales, Accounts],
            Self::Indents => &[Admin, Manager, Production, Store, Purchase],
            Self::PurchaseOrders => &[Admin, Manager, Purchase, Accounts],
            Self::Grns => &[Admin, Manager, Store, Purchase],
            Self::Inventory => &[Admin, Manager, Store, Production],
            Self::Production => &[Admin, Manager, Production],
            Self::CustomerOrders => &[Admin, Manager, Sales],
            Self::Vendors => &[Admin, Manager, Purchase, Accounts],
            Self::Catalog => &[Admin, Manager, Production, Sales],
            Self::Units => &[Admin, Manager, Store],
            Self::TransitRegister => &[Admin, Manager, Store],
            Self::Expenditure => &[Admin, Manager, Accounts],
            Self::Users => &[Admin],
        }
    }

    #[must_use]
    pub fn allows(self, role: Role) -> bool {
        role == Role::Admin || self.allowed_roles().contains(&role)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Indents => "indents",
            Self::PurchaseOrders => "purchase_orders",
            Self::Grns => "grns",
            Self::Inventory => "inventory",
            Self::Production => "production",
            Self::CustomerOrders => "customer_orders",
            Self::Vendors => "vendors",
            Self::Catalog => "catalog",
            Self::Units => "units",
            Self::TransitRegister => "transit_register",
            Self::Expenditure => "expenditure",
            Self::Users => "users",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
