//! Warehouse types.

use serde::Deserialize;

use crate::core::TextFilter;

/// A warehouse as returned by `GET /api/warehouses`.
#[derive(Clone, Debug, Deserialize)]
pub struct Warehouse {
    pub id: u64,
    pub name: String,
    pub city: String,
    pub country: String,
    pub manager: String,
    /// Total storage capacity in pallet positions.
    pub capacity_units: u32,
    /// Currently occupied pallet positions.
    pub used_units: u32,
    pub active: bool,
}

impl Warehouse {
    /// Occupancy as a whole percentage, 0 when capacity is unknown.
    pub fn utilization_pct(&self) -> u32 {
        if self.capacity_units == 0 {
            return 0;
        }
        (self.used_units * 100 / self.capacity_units).min(100)
    }
}

impl TextFilter for Warehouse {
    fn filter_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.city, &self.country, &self.manager]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warehouse(used: u32, capacity: u32) -> Warehouse {
        Warehouse {
            id: 1,
            name: "North DC".into(),
            city: "Tacoma".into(),
            country: "US".into(),
            manager: "R. Vance".into(),
            capacity_units: capacity,
            used_units: used,
            active: true,
        }
    }

    #[test]
    fn test_utilization_rounds_down() {
        assert_eq!(warehouse(1, 3).utilization_pct(), 33);
        assert_eq!(warehouse(0, 3).utilization_pct(), 0);
        assert_eq!(warehouse(3, 3).utilization_pct(), 100);
    }

    #[test]
    fn test_utilization_guards_zero_capacity_and_overfill() {
        assert_eq!(warehouse(5, 0).utilization_pct(), 0);
        assert_eq!(warehouse(7, 5).utilization_pct(), 100);
    }
}
