/// Edge weight type, distance in kilometers
pub type Weight = u32;
/// Accumulated length of a path, wide enough for any sum of route weights
pub type Distance = u64;
/// Unit label printed after every distance
pub const DISTANCE_UNIT: &str = "km";
/// Separator between two airports of a path or a route
pub const ROUTE_SEPARATOR: &str = "→";
