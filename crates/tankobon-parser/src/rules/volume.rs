//! Volume rules.

use super::{Rule, Scope, COMICS, PROSE};
use crate::model::LibraryType;
use std::sync::LazyLock;

pub(super) static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // "Vol 1", "Vol. 01", "Volume 3", "Vols 1-3"
        Rule::new(
            "explicit",
            r"(?i)(?:^|[^\p{L}])vol(?:ume)?s?\.?\s*(?P<volume>\d+(?:\.\d+)?(?:[-~]\d+(?:\.\d+)?)?)",
            Scope::All,
        ),
        // "v01", "v1-3", "v01c001"
        Rule::new(
            "bare-v",
            r"(?i)(?:^|[\s\-,\[(])v(?P<volume>\d+(?:\.\d+)?(?:[-~]\d+(?:\.\d+)?)?)(?:$|[^\p{L}\d]|c\d)",
            Scope::Except(PROSE),
        ),
        // "Tower of God S01 014"
        Rule::new(
            "season",
            r"(?i)(?:^|\s)s(?P<volume>\d+)(?:\s|$)",
            Scope::Only(&[LibraryType::Manga]),
        ),
        // "Asterix Tome 3", "Asterix T01"
        Rule::new(
            "tome",
            r"(?i)(?:^|[^\p{L}])(?:tome|t)\s?(?P<volume>\d+(?:[-~]\d+)?)(?:$|[^\p{L}\d])",
            Scope::Only(COMICS),
        ),
        Rule::new("cjk-di-juan", r"第(?P<volume>\d+)[卷册巻]", Scope::Except(COMICS)),
        Rule::new("cjk-juan", r"[卷册](?P<volume>\d+)", Scope::Except(COMICS)),
        Rule::new("ja-kan", r"(?P<volume>\d+)巻", Scope::Except(COMICS)),
        Rule::new("ko-gwon", r"제?(?P<volume>\d+)권", Scope::Except(COMICS)),
        Rule::new("ru-tom", r"(?i)том\s*(?P<volume>\d+)", Scope::Except(COMICS)),
        Rule::new("ru-n-tom", r"(?i)(?P<volume>\d+)\s*том", Scope::Except(COMICS)),
        Rule::new("th-lem", r"เล่ม\s*(?P<volume>\d+)", Scope::Except(COMICS)),
    ]
});
