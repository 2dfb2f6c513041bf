/// Column names of the seven user-supplied account fields, in form order.
///
/// These are the names used in the `accounts` table and in validation
/// messages. The `id` column is excluded: it is assigned by the store.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "name",
    "type",
    "address",
    "status",
    "areaid",
    "metersize",
    "meterno",
];

/// Common status values.
///
/// Status is free text at the storage layer; these are suggestions for the
/// UI, not an enforced enumeration.
pub mod statuses {
    pub const ACTIVE: &str = "active";
    pub const INACTIVE: &str = "inactive";
}
