//! Catalog query operations backing the HTTP endpoints
//!
//! This module provides the read-only queries over the charging station
//! catalog: area and street listings, provider lookups, and per-street and
//! per-zone aggregations.
//!
//! Case handling follows the conventions of the source data: street names
//! and localities are stored upper-case, so those queries upper-case the
//! input and compare exactly; area and provider queries fold the case of
//! both sides instead. Matches are always against the whole field value,
//! never substrings.

use super::StationCatalog;
use crate::app::models::{ChargingPoint, ChargingRecord, Lookup};
use std::collections::HashSet;

impl StationCatalog {
    /// Iterate the records satisfying `predicate`, in source order
    fn matching<'a>(
        &'a self,
        predicate: impl Fn(&ChargingRecord) -> bool + 'a,
    ) -> impl Iterator<Item = &'a ChargingRecord> + 'a {
        self.records.iter().filter(move |record| predicate(record))
    }

    /// List the distinct city areas that have at least one charging station
    ///
    /// Areas are returned in order of first appearance in the dataset, with
    /// their stored spelling.
    ///
    /// # Examples
    /// ```
    /// # use colonnine_api::app::services::station_catalog::StationCatalog;
    /// # use std::path::PathBuf;
    /// let catalog = StationCatalog::new(PathBuf::from("ricarica_colonnine.csv"));
    /// let areas = catalog.list_areas();
    /// ```
    pub fn list_areas(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut areas = Vec::new();

        for record in &self.records {
            if seen.insert(record.area.as_str()) {
                areas.push(record.area.clone());
            }
        }

        areas
    }

    /// List the streets with charging stations in the given area
    ///
    /// The area name is matched case-insensitively. One entry is returned
    /// per matching record, so a street appears as many times as it has
    /// charging points in the area. An unknown area yields an empty list.
    ///
    /// # Arguments
    /// * `area` - City area name (e.g., "DUOMO")
    ///
    /// # Returns
    /// Street names in source order, duplicates included
    pub fn list_streets_in_area(&self, area: &str) -> Vec<String> {
        let area_lower = area.to_lowercase();
        self.matching(move |record| record.area.to_lowercase() == area_lower)
            .map(|record| record.street.clone())
            .collect()
    }

    /// Find the provider operating on the given street
    ///
    /// The street name is upper-cased and compared against the stored value.
    /// When several records share the street, the first one in source order
    /// wins; additional providers on the same street are not reported.
    ///
    /// # Arguments
    /// * `street` - Street name in any casing
    pub fn find_provider_for_street(&self, street: &str) -> Lookup<String> {
        let street_upper = street.to_uppercase();
        match self.matching(move |record| record.street == street_upper).next() {
            Some(record) => Lookup::Found(record.provider.clone()),
            None => Lookup::NotFound,
        }
    }

    /// List the charging points operated by the given provider
    ///
    /// Provider names are matched case-insensitively. Each matching record
    /// yields one [`ChargingPoint`] with its locality in display form. An
    /// unknown provider yields an empty list.
    ///
    /// # Arguments
    /// * `provider` - Provider name (e.g., "Sorgenia")
    pub fn list_points_by_provider(&self, provider: &str) -> Vec<ChargingPoint> {
        let provider_upper = provider.to_uppercase();
        self.matching(move |record| record.provider.to_uppercase() == provider_upper)
            .map(ChargingPoint::from)
            .collect()
    }

    /// Count the charging stations installed on the given street
    ///
    /// Sums the station counts of every record whose stored street name
    /// equals the upper-cased input. A street that exists with no installed
    /// stations yields `Found(0)`, which is distinct from `NotFound`.
    ///
    /// # Arguments
    /// * `street` - Street name in any casing
    pub fn count_stations_on_street(&self, street: &str) -> Lookup<u32> {
        let street_upper = street.to_uppercase();
        let mut rows = self
            .matching(move |record| record.street == street_upper)
            .peekable();

        if rows.peek().is_none() {
            return Lookup::NotFound;
        }

        Lookup::Found(rows.map(|record| record.station_count).sum())
    }

    /// List the distinct socket types available in the given zone
    ///
    /// The zone is upper-cased and compared against the stored locality.
    /// Socket types are returned in order of first appearance.
    ///
    /// # Arguments
    /// * `zone` - Locality of the charging point (e.g., "VIA LARGA 7")
    pub fn list_socket_types_by_zone(&self, zone: &str) -> Lookup<Vec<String>> {
        let zone_upper = zone.to_uppercase();
        let mut matched = false;
        let mut socket_types: Vec<String> = Vec::new();

        for record in self.matching(move |record| record.locality == zone_upper) {
            matched = true;
            if !socket_types.contains(&record.socket_type) {
                socket_types.push(record.socket_type.clone());
            }
        }

        if matched {
            Lookup::Found(socket_types)
        } else {
            Lookup::NotFound
        }
    }
}
