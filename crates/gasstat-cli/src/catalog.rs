//! Fixed catalog of benchmark categories and their metric files.
//!
//! Every benchmark suite writes one file per metric, named
//! `<category>_<suffix><extension>`, into a shared statistics directory.

use std::path::PathBuf;

pub(crate) const DEFAULT_SAMPLE_DIR: &str = "./test/statistics";
pub(crate) const DEFAULT_EXTENSION: &str = ".txt";

/// A group of related benchmark metrics.
#[derive(Debug)]
pub(crate) struct Category {
    /// File name prefix shared by all metrics of the category.
    pub name: &'static str,
    /// Metric identifiers, in report order.
    pub suffixes: &'static [&'static str],
}

impl Category {
    pub(crate) fn has_suffix(&self, suffix: &str) -> bool {
        self.suffixes.iter().any(|s| *s == suffix)
    }
}

static MARKETPLACE: Category = Category {
    name: "marketplace_test",
    suffixes: &[
        "add_product_execution_time",
        "add_product_gas_used",
        "buy_product_execution_time",
        "buy_product_gas_used",
        "create_channel_execution_time",
        "create_channel_gas_used",
        "withdraw_channel_execution_time",
        "withdraw_channel_gas_used",
    ],
};

static PRODUCT: Category = Category {
    name: "product_test",
    suffixes: &[
        "buy_execution_time",
        "buy_product_gas_used",
        "available_execution_time",
        "available_gas_used",
        "price_execution_time",
        "price_gas_used",
        "name_execution_time",
        "name_gas_used",
        "update_product_execution_time",
        "update_product_gas_used",
        "owner_execution_time",
        "owner_gas_used",
    ],
};

static BIDIRECTIONAL_CHANNEL: Category = Category {
    name: "bidirectionalchannel_test",
    suffixes: &[
        "change_balance_execution_time",
        "change_balance_gas_used",
        "withdraw_execution_time",
        "withdraw_gas_used",
        "expires_at_execution_time",
        "expires_at_gas_used",
        "deposit_execution_time",
        "deposit_gas_used",
        "contract_balance_execution_time",
        "block_timestamp_execution_time",
    ],
};

/// Command-line handle for a [`Category`].
///
/// Parsed case-insensitively from the variant name (`marketplace`,
/// `product`, `bidirectionalchannel`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::FromStr)]
pub(crate) enum CategoryKind {
    #[display("marketplace")]
    Marketplace,
    #[display("product")]
    Product,
    #[display("bidirectionalchannel")]
    BidirectionalChannel,
}

impl CategoryKind {
    /// All categories in report order.
    pub(crate) const ALL: [CategoryKind; 3] = [
        CategoryKind::Marketplace,
        CategoryKind::Product,
        CategoryKind::BidirectionalChannel,
    ];

    pub(crate) fn category(self) -> &'static Category {
        match self {
            CategoryKind::Marketplace => &MARKETPLACE,
            CategoryKind::Product => &PRODUCT,
            CategoryKind::BidirectionalChannel => &BIDIRECTIONAL_CHANNEL,
        }
    }
}

/// Where sample files live on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SampleLayout {
    pub dir: PathBuf,
    pub extension: String,
}

impl Default for SampleLayout {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_DIR, DEFAULT_EXTENSION)
    }
}

impl SampleLayout {
    pub(crate) fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    /// Path of the sample file for `suffix` in `category`.
    pub(crate) fn sample_path(&self, category: &Category, suffix: &str) -> PathBuf {
        self.dir
            .join(format!("{}_{suffix}{}", category.name, self.extension))
    }
}
