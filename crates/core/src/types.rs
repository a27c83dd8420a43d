/// Primary keys of the catalog tables are MySQL `INT AUTO_INCREMENT`.
pub type DbId = i64;
