//! Closed sets of part categories and countable tables, and the filterable
//! columns each of them owns.
//!
//! Column names in this module are the canonical SQL identifiers. Incoming
//! filter names are matched case-insensitively and then swapped for the
//! canonical spelling, so a client-provided string never reaches SQL as an
//! identifier. Table names are likewise resolved from the enum variant, not
//! from the request.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Column allow-lists
// ---------------------------------------------------------------------------

/// Columns every part table carries besides the universal ones.
pub const UNIVERSAL_PART_COLUMNS: &[&str] = &["ID", "Url", "Image", "Image_Url"];

/// Filter names valid in every search context, parts and inventory alike.
pub const UNIVERSAL_COLUMNS: &[&str] = &[
    "Price",
    "Name",
    "Manufacturer",
    "priceMin",
    "priceMax",
    "priceRange",
];

/// Global switches that always pass the column allow-list.
pub const SWITCHES: &[&str] = &["strict", "inverted"];

const CHASSIS_COLUMNS: &[&str] = &["Chassis_type", "Dimensions", "Color", "Compatibility"];

const CPU_COLUMNS: &[&str] = &[
    "Core_Count",
    "Thread_Count",
    "Base_Clock",
    "Cache",
    "Socket",
    "Cpu_Cooler",
    "TDP",
    "Integrated_GPU",
];

const CPU_COOLER_COLUMNS: &[&str] = &[
    "Compatibility",
    "Cooling_Potential",
    "Fan_RPM",
    "Noise_Level",
    "Dimensions",
];

const GPU_COLUMNS: &[&str] = &[
    "Cores",
    "Core_Clock",
    "Memory",
    "Interface",
    "Dimensions",
    "TDP",
];

const MEMORY_COLUMNS: &[&str] = &["Type", "Amount", "Speed", "Latency"];

const MOTHERBOARD_COLUMNS: &[&str] = &["Chipset", "Form_Factor", "Memory_Compatibility"];

const PSU_COLUMNS: &[&str] = &["Is_ATX12V", "Efficiency", "Modular", "Dimensions"];

const STORAGE_COLUMNS: &[&str] = &[
    "Capacity",
    "Form_Factor",
    "Interface",
    "Cache",
    "Flash",
    "TBW",
];

const INVENTORY_COLUMNS: &[&str] = &[
    "PartID",
    "PartTypeID",
    "ModelNumber",
    "SerialNumber",
    "Available",
    "availableMin",
    "availableMax",
    "availableRange",
    "DateAdded",
    "additionaldetails",
];

/// Table backing the inventory search context.
pub const INVENTORY_TABLE: &str = "part_inventory";

/// Extra names the client accepts alongside the eight part categories.
pub const PART_CATEGORY_ALIASES: &[&str] = &["part_inventory", "inventory"];

// ---------------------------------------------------------------------------
// Part categories
// ---------------------------------------------------------------------------

/// One of the eight fixed part types, each backed by its own table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PartCategory {
    Chassis,
    #[default]
    Cpu,
    CpuCooler,
    Gpu,
    Memory,
    Motherboard,
    Psu,
    Storage,
}

impl PartCategory {
    pub const ALL: [PartCategory; 8] = [
        PartCategory::Chassis,
        PartCategory::Cpu,
        PartCategory::CpuCooler,
        PartCategory::Gpu,
        PartCategory::Memory,
        PartCategory::Motherboard,
        PartCategory::Psu,
        PartCategory::Storage,
    ];

    /// Wire name, as used in `partName=` and in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            PartCategory::Chassis => "chassis",
            PartCategory::Cpu => "cpu",
            PartCategory::CpuCooler => "cpu_cooler",
            PartCategory::Gpu => "gpu",
            PartCategory::Memory => "memory",
            PartCategory::Motherboard => "motherboard",
            PartCategory::Psu => "psu",
            PartCategory::Storage => "storage",
        }
    }

    /// SQL table holding the rows of this category.
    pub fn table(self) -> &'static str {
        match self {
            PartCategory::Chassis => "chassis",
            PartCategory::Cpu => "cpu",
            PartCategory::CpuCooler => "cpu_cooler",
            PartCategory::Gpu => "gpu",
            PartCategory::Memory => "memory",
            PartCategory::Motherboard => "motherboard",
            PartCategory::Psu => "psu",
            PartCategory::Storage => "storage",
        }
    }

    /// Category-specific filterable columns.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            PartCategory::Chassis => CHASSIS_COLUMNS,
            PartCategory::Cpu => CPU_COLUMNS,
            PartCategory::CpuCooler => CPU_COOLER_COLUMNS,
            PartCategory::Gpu => GPU_COLUMNS,
            PartCategory::Memory => MEMORY_COLUMNS,
            PartCategory::Motherboard => MOTHERBOARD_COLUMNS,
            PartCategory::Psu => PSU_COLUMNS,
            PartCategory::Storage => STORAGE_COLUMNS,
        }
    }
}

impl fmt::Display for PartCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::NotAllowed(format!("partName '{s}' is not allowed!")))
    }
}

/// Client-side category check: the eight categories plus the inventory aliases.
pub fn is_allowed_part_name(name: &str) -> bool {
    !name.is_empty() && (name.parse::<PartCategory>().is_ok() || PART_CATEGORY_ALIASES.contains(&name))
}

// ---------------------------------------------------------------------------
// Search contexts
// ---------------------------------------------------------------------------

/// The table a filter request runs against, with its column allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchContext {
    Part(PartCategory),
    Inventory,
}

/// A numeric column that accepts `<col>Min`, `<col>Max` and `<col>Range`
/// bound filters in addition to the plain column filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedColumn {
    pub column: &'static str,
    /// Lowercased filter names.
    pub plain: &'static str,
    pub min: &'static str,
    pub max: &'static str,
    pub range: &'static str,
}

pub const PRICE_BOUNDS: BoundedColumn = BoundedColumn {
    column: "Price",
    plain: "price",
    min: "pricemin",
    max: "pricemax",
    range: "pricerange",
};

pub const AVAILABLE_BOUNDS: BoundedColumn = BoundedColumn {
    column: "Available",
    plain: "available",
    min: "availablemin",
    max: "availablemax",
    range: "availablerange",
};

impl SearchContext {
    /// Name used in allow-list error messages.
    pub fn name(self) -> &'static str {
        match self {
            SearchContext::Part(category) => category.as_str(),
            SearchContext::Inventory => "inventory",
        }
    }

    pub fn table(self) -> &'static str {
        match self {
            SearchContext::Part(category) => category.table(),
            SearchContext::Inventory => INVENTORY_TABLE,
        }
    }

    pub fn bounded_columns(self) -> &'static [BoundedColumn] {
        match self {
            SearchContext::Part(_) => &[PRICE_BOUNDS],
            SearchContext::Inventory => &[PRICE_BOUNDS, AVAILABLE_BOUNDS],
        }
    }

    /// Every filterable column of this context, universal ones first.
    pub fn columns(self) -> impl Iterator<Item = &'static str> {
        let (universal_part, specific): (&'static [&'static str], _) = match self {
            SearchContext::Part(category) => (UNIVERSAL_PART_COLUMNS, category.columns()),
            SearchContext::Inventory => (&[], INVENTORY_COLUMNS),
        };
        universal_part
            .iter()
            .chain(UNIVERSAL_COLUMNS)
            .chain(specific)
            .copied()
    }

    /// Resolve a client-supplied filter name to its canonical column,
    /// ignoring case. `None` when the name is not in the allow-list.
    pub fn resolve_column(self, name: &str) -> Option<&'static str> {
        self.columns().find(|col| col.eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for SearchContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Countable tables
// ---------------------------------------------------------------------------

/// Non-part tables the page-count endpoint accepts.
const OTHER_COUNTABLE_TABLES: &[&str] = &[
    "addresses",
    "address_types",
    "admins",
    "customers",
    "orders",
    "order_types",
    "part_inventory",
    "part_types",
    "users",
];

/// A table name that passed the `tableName` allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableName(&'static str);

impl TableName {
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl Default for TableName {
    fn default() -> Self {
        TableName(PartCategory::default().table())
    }
}

impl FromStr for TableName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartCategory::ALL
            .iter()
            .map(|c| c.table())
            .chain(OTHER_COUNTABLE_TABLES.iter().copied())
            .find(|t| *t == s)
            .map(TableName)
            .ok_or_else(|| CoreError::NotAllowed(format!("tableName '{s}' is not allowed!")))
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
