use std::sync::LazyLock;

use crate::Table;

/// Five small integers with one dominant outcome.
pub static REFERENCE: LazyLock<Table<i64>> = LazyLock::new(|| {
    Table::builder()
        .values(vec![-1, 0, 1, 2, 3])
        .probabilities(vec![0.01, 0.3, 0.58, 0.1, 0.01])
        .build()
});

/// Fair coin over `0` and `1`.
pub static COIN: LazyLock<Table<i64>> = LazyLock::new(|| {
    Table::builder()
        .values(vec![0, 1])
        .probabilities(vec![0.5, 0.5])
        .build()
});
