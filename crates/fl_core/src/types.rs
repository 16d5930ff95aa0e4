use serde::{Deserialize, Serialize};

/// Declares a closed tag enumeration that still round-trips tags it does not know.
///
/// Unknown tags land in `Other` so newer service responses keep parsing; callers match
/// exhaustively on the known variants and treat `Other` as "nothing to do".
macro_rules! tag_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $tag:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $tag,)+
                    Self::Other(raw) => raw.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                match raw.as_str() {
                    $($tag => Self::$variant,)+
                    _ => Self::Other(raw),
                }
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::from(raw.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

tag_enum!(
    /// Category of an analyzed region.
    BlockType {
        Page => "PAGE",
        Line => "LINE",
        Word => "WORD",
        KeyValueSet => "KEY_VALUE_SET",
        Table => "TABLE",
        Cell => "CELL",
        MergedCell => "MERGED_CELL",
        SelectionElement => "SELECTION_ELEMENT",
        Signature => "SIGNATURE",
        Title => "TITLE",
        Query => "QUERY",
        QueryResult => "QUERY_RESULT",
    }
);

tag_enum!(
    /// Type of a directed link between regions.
    LinkKind {
        Value => "VALUE",
        Child => "CHILD",
        ComplexFeatures => "COMPLEX_FEATURES",
        MergedCell => "MERGED_CELL",
        Title => "TITLE",
        Answer => "ANSWER",
        Table => "TABLE",
        TableTitle => "TABLE_TITLE",
        TableFooter => "TABLE_FOOTER",
    }
);

tag_enum!(
    EntityType {
        Key => "KEY",
        Value => "VALUE",
        ColumnHeader => "COLUMN_HEADER",
        TableTitle => "TABLE_TITLE",
        TableFooter => "TABLE_FOOTER",
        TableSectionTitle => "TABLE_SECTION_TITLE",
        TableSummary => "TABLE_SUMMARY",
        StructuredTable => "STRUCTURED_TABLE",
        SemiStructuredTable => "SEMI_STRUCTURED_TABLE",
    }
);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegionId(pub String);

impl RegionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RegionId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Axis-aligned box; every field is a fraction of the image width or height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BoundingBox {
    pub width: f32,
    pub height: f32,
    pub left: f32,
    pub top: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NormalizedPoint {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Geometry {
    #[serde(default)]
    pub bounding_box: BoundingBox,
    #[serde(default)]
    pub polygon: Vec<NormalizedPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Link {
    #[serde(rename = "Type")]
    pub kind: LinkKind,
    #[serde(default)]
    pub ids: Vec<RegionId>,
}

impl Link {
    pub fn new(kind: LinkKind, ids: &[&str]) -> Self {
        Self {
            kind,
            ids: ids.iter().map(|id| RegionId::from(*id)).collect(),
        }
    }
}

/// One annotated area of an analyzed document.
///
/// Field names follow the service's `Block` JSON so saved responses deserialize directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Region {
    pub id: RegionId,
    pub block_type: BlockType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    #[serde(default)]
    pub geometry: Geometry,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entity_types: Vec<EntityType>,
    #[serde(default, rename = "Relationships", skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_span: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_span: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_status: Option<String>,
}

impl Region {
    pub fn new(id: &str, block_type: BlockType) -> Self {
        Self {
            id: RegionId::from(id),
            block_type,
            text: None,
            confidence: None,
            geometry: Geometry::default(),
            entity_types: Vec::new(),
            links: Vec::new(),
            page: None,
            row_index: None,
            column_index: None,
            row_span: None,
            column_span: None,
            selection_status: None,
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn with_entity(mut self, entity: EntityType) -> Self {
        self.entity_types.push(entity);
        self
    }

    pub fn with_link(mut self, kind: LinkKind, ids: &[&str]) -> Self {
        self.links.push(Link::new(kind, ids));
        self
    }

    pub fn with_bounding_box(mut self, left: f32, top: f32, width: f32, height: f32) -> Self {
        self.geometry.bounding_box = BoundingBox {
            width,
            height,
            left,
            top,
        };
        self
    }

    pub fn with_polygon(mut self, points: &[(f32, f32)]) -> Self {
        self.geometry.polygon = points
            .iter()
            .map(|(x, y)| NormalizedPoint { x: *x, y: *y })
            .collect();
        self
    }

    /// A key/value container tagged as the key side of a form field.
    pub fn is_key(&self) -> bool {
        self.block_type == BlockType::KeyValueSet && self.entity_types.contains(&EntityType::Key)
    }

    pub fn has_links(&self) -> bool {
        !self.links.is_empty()
    }

    /// Target ids of every link of `kind`, in declaration order.
    pub fn linked_ids(&self, kind: LinkKind) -> impl Iterator<Item = &RegionId> + '_ {
        self.links
            .iter()
            .filter(move |link| link.kind == kind)
            .flat_map(|link| link.ids.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentMetadata {
    #[serde(default)]
    pub pages: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HumanLoopActivation {
    #[serde(default)]
    pub human_loop_arn: Option<String>,
    #[serde(default, rename = "HumanLoopActivationReasons")]
    pub activation_reasons: Vec<String>,
}

/// Output of one document analysis call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnalysisResult {
    #[serde(default)]
    pub document_metadata: Option<DocumentMetadata>,
    #[serde(default, rename = "Blocks")]
    pub regions: Vec<Region>,
    #[serde(default, rename = "HumanLoopActivationOutput")]
    pub human_loop: Option<HumanLoopActivation>,
    #[serde(default, rename = "AnalyzeDocumentModelVersion")]
    pub model_version: Option<String>,
}

impl AnalysisResult {
    pub fn page_count(&self) -> Option<u32> {
        self.document_metadata.as_ref().and_then(|m| m.pages)
    }
}
