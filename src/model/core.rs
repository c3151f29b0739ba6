use serde::{Deserialize, Serialize};

use crate::error::{ComposerError, Result};

/// Grid denominator: column sizes are fractions of twelve.
pub const GRID_UNITS: u8 = 12;

/// Horizontal distribution of columns inside a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HorizontalAlignment {
    #[default]
    Start,
    Center,
    End,
    SpaceAround,
    SpaceBetween,
}

impl HorizontalAlignment {
    /// Grid utility class, `None` for the `Start` default.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Start => None,
            Self::Center => Some("slds-grid_align-center"),
            Self::End => Some("slds-grid_align-end"),
            Self::SpaceAround => Some("slds-grid_space-around"),
            Self::SpaceBetween => Some("slds-grid_space-between"),
        }
    }
}

/// Cross-axis alignment of columns inside a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerticalAlignment {
    #[default]
    Start,
    Center,
    End,
    Stretch,
}

impl VerticalAlignment {
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Start => None,
            Self::Center => Some("slds-grid_vertical-align-center"),
            Self::End => Some("slds-grid_vertical-align-end"),
            Self::Stretch => Some("slds-grid_vertical-align-stretch"),
        }
    }
}

/// Negative-margin bleed letting columns pull past the row's padded edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PullBoundary {
    #[default]
    None,
    Small,
    Medium,
    Large,
}

impl PullBoundary {
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Small => Some("slds-grid_pull-padded-small"),
            Self::Medium => Some("slds-grid_pull-padded-medium"),
            Self::Large => Some("slds-grid_pull-padded-large"),
        }
    }
}

/// Spacing presets mapped onto the framework's padding utility classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Padding {
    #[default]
    None,
    AroundSmall,
    AroundMedium,
    AroundLarge,
    HorizontalSmall,
    HorizontalMedium,
    HorizontalLarge,
    VerticalSmall,
    VerticalMedium,
    VerticalLarge,
}

impl Padding {
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::AroundSmall => Some("slds-p-around_small"),
            Self::AroundMedium => Some("slds-p-around_medium"),
            Self::AroundLarge => Some("slds-p-around_large"),
            Self::HorizontalSmall => Some("slds-p-horizontal_small"),
            Self::HorizontalMedium => Some("slds-p-horizontal_medium"),
            Self::HorizontalLarge => Some("slds-p-horizontal_large"),
            Self::VerticalSmall => Some("slds-p-vertical_small"),
            Self::VerticalMedium => Some("slds-p-vertical_medium"),
            Self::VerticalLarge => Some("slds-p-vertical_large"),
        }
    }
}

/// Sizing strategy overriding the numeric twelve-unit fraction.
///
/// `Default` keeps fractional sizing in force; any other mode replaces the
/// size tokens entirely when markup is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Flexibility {
    #[default]
    Default,
    Auto,
    Shrink,
    NoShrink,
    Grow,
    NoGrow,
    NoFlex,
}

impl Flexibility {
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Auto => Some("slds-auto"),
            Self::Shrink => Some("slds-shrink"),
            Self::NoShrink => Some("slds-no-shrink"),
            Self::Grow => Some("slds-grow"),
            Self::NoGrow => Some("slds-no-grow"),
            Self::NoFlex => Some("slds-no-flex"),
        }
    }
}

/// A sized cell contributing a fraction (in twelfths) of its row's width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub size: u8,
    pub size_small: u8,
    pub size_medium: u8,
    pub device_specific: bool,
    pub padding: Padding,
    pub flexibility: Option<Flexibility>,
}

impl Column {
    /// Factory defaults: a quarter-width desktop cell that goes full-width
    /// on small devices and half-width on medium ones.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            size: 3,
            size_small: 12,
            size_medium: 6,
            device_specific: false,
            padding: Padding::AroundSmall,
            flexibility: None,
        }
    }

    pub fn with_size(mut self, size: u8) -> Self {
        self.size = size;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_flexibility(mut self, flexibility: Flexibility) -> Self {
        self.flexibility = Some(flexibility);
        self
    }

    /// All three sizes must stay within the twelve-unit grid.
    pub fn validate(&self) -> Result<()> {
        for value in [self.size, self.size_small, self.size_medium] {
            if value < 1 || value > GRID_UNITS {
                return Err(ComposerError::SizeOutOfRange(value));
            }
        }
        Ok(())
    }
}

/// A horizontal flex container holding an ordered sequence of columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: String,
    pub columns: Vec<Column>,
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
    pub pull_boundaries: PullBoundary,
    pub multiple_rows: bool,
    pub padding: Padding,
    pub flexibility: Flexibility,
}

impl Row {
    /// A row is never empty, so construction takes its first column.
    pub fn new(id: impl Into<String>, first_column: Column) -> Self {
        Self {
            id: id.into(),
            columns: vec![first_column],
            horizontal_alignment: HorizontalAlignment::Start,
            vertical_alignment: VerticalAlignment::Start,
            pull_boundaries: PullBoundary::None,
            multiple_rows: true,
            padding: Padding::None,
            flexibility: Flexibility::Default,
        }
    }

    /// Merge the supplied fields into the row; absent fields stay unchanged.
    pub fn apply(&mut self, patch: RowPatch) {
        if let Some(value) = patch.horizontal_alignment {
            self.horizontal_alignment = value;
        }
        if let Some(value) = patch.vertical_alignment {
            self.vertical_alignment = value;
        }
        if let Some(value) = patch.pull_boundaries {
            self.pull_boundaries = value;
        }
        if let Some(value) = patch.multiple_rows {
            self.multiple_rows = value;
        }
        if let Some(value) = patch.padding {
            self.padding = value;
        }
        if let Some(value) = patch.flexibility {
            self.flexibility = value;
        }
    }

    /// Sizing mode in force for one of this row's columns.
    ///
    /// A non-default row mode governs every column uniformly; otherwise the
    /// column's own optional mode applies.
    pub fn effective_flexibility(&self, column: &Column) -> Flexibility {
        if self.flexibility != Flexibility::Default {
            self.flexibility
        } else {
            column.flexibility.unwrap_or_default()
        }
    }
}

/// Partial update for [`Row`]; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowPatch {
    pub horizontal_alignment: Option<HorizontalAlignment>,
    pub vertical_alignment: Option<VerticalAlignment>,
    pub pull_boundaries: Option<PullBoundary>,
    pub multiple_rows: Option<bool>,
    pub padding: Option<Padding>,
    pub flexibility: Option<Flexibility>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_column_matches_factory_values() {
        let column = Column::new("col-1");
        assert_eq!(column.size, 3);
        assert_eq!(column.size_small, 12);
        assert_eq!(column.size_medium, 6);
        assert!(!column.device_specific);
        assert_eq!(column.padding, Padding::AroundSmall);
        assert_eq!(column.flexibility, None);
    }

    #[test]
    fn default_tokens_emit_no_classes() {
        assert_eq!(HorizontalAlignment::Start.class(), None);
        assert_eq!(VerticalAlignment::Start.class(), None);
        assert_eq!(PullBoundary::None.class(), None);
        assert_eq!(Padding::None.class(), None);
        assert_eq!(Flexibility::Default.class(), None);
    }

    #[test]
    fn non_default_tokens_map_to_utility_classes() {
        assert_eq!(
            HorizontalAlignment::SpaceBetween.class(),
            Some("slds-grid_space-between")
        );
        assert_eq!(
            VerticalAlignment::Stretch.class(),
            Some("slds-grid_vertical-align-stretch")
        );
        assert_eq!(
            PullBoundary::Medium.class(),
            Some("slds-grid_pull-padded-medium")
        );
        assert_eq!(Padding::VerticalLarge.class(), Some("slds-p-vertical_large"));
        assert_eq!(Flexibility::NoShrink.class(), Some("slds-no-shrink"));
    }

    #[test]
    fn patch_merges_only_supplied_fields() {
        let mut row = Row::new("row-1", Column::new("col-1"));
        row.apply(RowPatch {
            horizontal_alignment: Some(HorizontalAlignment::Center),
            multiple_rows: Some(false),
            ..RowPatch::default()
        });

        assert_eq!(row.horizontal_alignment, HorizontalAlignment::Center);
        assert!(!row.multiple_rows);
        // Unspecified fields keep their defaults.
        assert_eq!(row.vertical_alignment, VerticalAlignment::Start);
        assert_eq!(row.pull_boundaries, PullBoundary::None);
        assert_eq!(row.padding, Padding::None);
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut row = Row::new("row-1", Column::new("col-1"));
        let before = row.clone();
        row.apply(RowPatch::default());
        assert_eq!(row, before);
    }

    #[test]
    fn row_mode_overrides_column_mode() {
        let mut row = Row::new("row-1", Column::new("col-1").with_flexibility(Flexibility::Grow));
        assert_eq!(
            row.effective_flexibility(&row.columns[0]),
            Flexibility::Grow
        );

        row.flexibility = Flexibility::NoFlex;
        assert_eq!(
            row.effective_flexibility(&row.columns[0]),
            Flexibility::NoFlex
        );
    }

    #[test]
    fn size_validation_rejects_out_of_range() {
        let valid = Column::new("col-1").with_size(12);
        assert!(valid.validate().is_ok());

        let zero = Column::new("col-2").with_size(0);
        assert!(matches!(
            zero.validate(),
            Err(crate::error::ComposerError::SizeOutOfRange(0))
        ));

        let mut wide = Column::new("col-3");
        wide.size_medium = 13;
        assert!(matches!(
            wide.validate(),
            Err(crate::error::ComposerError::SizeOutOfRange(13))
        ));
    }
}
