mod en;
mod uk;

use crate::catalog::Node;
use crate::locale::Locale;

/// Locale trees shipped with the app, in `Locale::ALL` order.
pub(crate) static BUNDLED: &[(Locale, &Node)] = &[(Locale::En, &en::TREE), (Locale::Uk, &uk::TREE)];
