// Adapters layer: concrete integrations with the outside world. The only
// external system here is the filesystem, spoken to in CSV.

pub mod csv_store;
