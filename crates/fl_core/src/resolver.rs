use crate::selection::KeySelector;
use crate::types::{LinkKind, Region, RegionId};
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// Identifier lookup over the regions of one analysis result.
pub struct RegionIndex<'a> {
    by_id: HashMap<&'a str, &'a Region>,
}

impl<'a> RegionIndex<'a> {
    pub fn build(regions: &'a [Region]) -> Self {
        let mut by_id = HashMap::with_capacity(regions.len());
        for region in regions {
            match by_id.entry(region.id.as_str()) {
                Entry::Occupied(_) => {
                    warn!(id = %region.id, "duplicate region id; keeping first occurrence");
                }
                Entry::Vacant(slot) => {
                    slot.insert(region);
                }
            }
        }
        Self { by_id }
    }

    pub fn get(&self, id: &RegionId) -> Option<&'a Region> {
        self.by_id.get(id.as_str()).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Regions reached from `region` over links of `kind`, in declaration order.
    /// Ids with no matching region are skipped.
    pub fn follow(&self, region: &Region, kind: LinkKind) -> Vec<&'a Region> {
        region
            .linked_ids(kind)
            .filter_map(|id| {
                let found = self.get(id);
                if found.is_none() {
                    debug!(from = %region.id, missing = %id, "dangling link target skipped");
                }
                found
            })
            .collect()
    }
}

/// A key text and the value regions that answer it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedField {
    pub key: String,
    pub values: Vec<Region>,
}

/// Resolves one key region: its text from CHILD regions, its values two hops away
/// (VALUE link, then the value region's CHILD links).
pub fn resolve_key(index: &RegionIndex<'_>, key_region: &Region) -> ResolvedField {
    let key = index
        .follow(key_region, LinkKind::Child)
        .iter()
        .map(|block| block.text.as_deref().unwrap_or(""))
        .collect::<String>();

    let values = index
        .follow(key_region, LinkKind::Value)
        .into_iter()
        .filter(|value_region| value_region.has_links())
        .flat_map(|value_region| index.follow(value_region, LinkKind::Child))
        .cloned()
        .collect();

    ResolvedField { key, values }
}

/// Collects resolved fields and groups them by key text.
///
/// Repeated key text concatenates value lists in push order; nothing is deduplicated.
#[derive(Debug, Default)]
pub struct FieldMapBuilder {
    pending: Vec<ResolvedField>,
}

impl FieldMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: ResolvedField) {
        self.pending.push(field);
    }

    pub fn build(self) -> ResolvedFields {
        let mut fields: HashMap<String, Vec<Region>> = HashMap::new();
        for ResolvedField { key, values } in self.pending {
            fields.entry(key).or_default().extend(values);
        }
        ResolvedFields { fields }
    }
}

/// Key text → value regions for one analysis result. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedFields {
    fields: HashMap<String, Vec<Region>>,
}

impl ResolvedFields {
    pub fn get(&self, key: &str) -> Option<&[Region]> {
        self.fields.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Region])> {
        self.fields
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    pub fn select<'a>(
        &'a self,
        selector: &'a KeySelector,
    ) -> impl Iterator<Item = (&'a str, &'a [Region])> + 'a {
        self.iter().filter(move |(key, _)| selector.matches(key))
    }

    /// Entries ordered by key text, for stable output.
    pub fn sorted(&self) -> BTreeMap<&str, &[Region]> {
        self.iter().collect()
    }
}

/// Builds the key/value mapping for every KEY region in `regions`.
pub fn resolve_fields(regions: &[Region]) -> ResolvedFields {
    let index = RegionIndex::build(regions);
    let mut builder = FieldMapBuilder::new();
    for key_region in regions.iter().filter(|region| region.is_key()) {
        builder.push(resolve_key(&index, key_region));
    }
    let fields = builder.build();
    debug!(regions = index.len(), fields = fields.len(), "resolved key/value fields");
    fields
}
