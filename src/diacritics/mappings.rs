//! 变音符号映射表
//!
//! 基础拉丁字母 → 全部预组合变体。大小写分别成表，顺序即查询顺序。

use crate::diacritics::types::MappingEntry;

/// 内置映射表
///
/// 大部分变体可经 NFD 分解为基础字母 + U+0300..U+036F 组合符号；
/// 带横线/斜线/钩的字母（如 `ø`、`ł`、`đ`）没有规范分解，仅靠反向索引折叠。
pub static DIACRITIC_MAPPINGS: &[MappingEntry] = &[
    MappingEntry::new("A", "ÀÁÂÃÄÅĀĂĄǍǞǠǺȀȂȦḀẠẢẤẦẨẪẬẮẰẲẴẶȺ"),
    MappingEntry::new("a", "àáâãäåāăąǎǟǡǻȁȃȧḁạảấầẩẫậắằẳẵặⱥ"),
    MappingEntry::new("B", "ḂḄḆɃ"),
    MappingEntry::new("b", "ḃḅḇƀ"),
    MappingEntry::new("C", "ÇĆĈĊČḈƇȻ"),
    MappingEntry::new("c", "çćĉċčḉƈȼ"),
    MappingEntry::new("D", "ĎĐḊḌḎḐḒ"),
    MappingEntry::new("d", "ďđḋḍḏḑḓ"),
    MappingEntry::new("E", "ÈÉÊËĒĔĖĘĚȄȆȨḔḖḘḚḜẸẺẼẾỀỂỄỆɆ"),
    MappingEntry::new("e", "èéêëēĕėęěȅȇȩḕḗḙḛḝẹẻẽếềểễệɇ"),
    MappingEntry::new("F", "Ḟ"),
    MappingEntry::new("f", "ḟ"),
    MappingEntry::new("G", "ĜĞĠĢǦǴḠǤ"),
    MappingEntry::new("g", "ĝğġģǧǵḡǥ"),
    MappingEntry::new("H", "ĤĦȞḢḤḦḨḪ"),
    MappingEntry::new("h", "ĥħȟḣḥḧḩḫẖ"),
    MappingEntry::new("I", "ÌÍÎÏĨĪĬĮİǏȈȊḬḮỈỊƗ"),
    MappingEntry::new("i", "ìíîïĩīĭįǐȉȋḭḯỉịɨı"),
    MappingEntry::new("J", "ĴɈ"),
    MappingEntry::new("j", "ĵǰɉ"),
    MappingEntry::new("K", "ĶǨḰḲḴƘ"),
    MappingEntry::new("k", "ķǩḱḳḵƙ"),
    MappingEntry::new("L", "ĹĻĽĿŁḶḸḺḼȽ"),
    MappingEntry::new("l", "ĺļľŀłḷḹḻḽƚ"),
    MappingEntry::new("M", "ḾṀṂ"),
    MappingEntry::new("m", "ḿṁṃ"),
    MappingEntry::new("N", "ÑŃŅŇǸṄṆṈṊ"),
    MappingEntry::new("n", "ñńņňǹṅṇṉṋ"),
    MappingEntry::new("O", "ÒÓÔÕÖØŌŎŐƠǑǪǬǾȌȎȪȬȮȰṌṎṐṒỌỎỐỒỔỖỘỚỜỞỠỢ"),
    MappingEntry::new("o", "òóôõöøōŏőơǒǫǭǿȍȏȫȭȯȱṍṏṑṓọỏốồổỗộớờởỡợ"),
    MappingEntry::new("P", "ṔṖ"),
    MappingEntry::new("p", "ṕṗ"),
    MappingEntry::new("R", "ŔŖŘȐȒṘṚṜṞ"),
    MappingEntry::new("r", "ŕŗřȑȓṙṛṝṟ"),
    MappingEntry::new("S", "ŚŜŞŠȘṠṢṤṦṨ"),
    MappingEntry::new("s", "śŝşšșṡṣṥṧṩ"),
    MappingEntry::new("T", "ŢŤŦȚṪṬṮṰ"),
    MappingEntry::new("t", "ţťŧțṫṭṯṱẗ"),
    MappingEntry::new("U", "ÙÚÛÜŨŪŬŮŰŲƯǓǕǗǙǛȔȖṲṴṶṸṺỤỦỨỪỬỮỰɄ"),
    MappingEntry::new("u", "ùúûüũūŭůűųưǔǖǘǚǜȕȗṳṵṷṹṻụủứừửữựʉ"),
    MappingEntry::new("V", "ṼṾ"),
    MappingEntry::new("v", "ṽṿ"),
    MappingEntry::new("W", "ŴẀẂẄẆẈ"),
    MappingEntry::new("w", "ŵẁẃẅẇẉẘ"),
    MappingEntry::new("X", "ẊẌ"),
    MappingEntry::new("x", "ẋẍ"),
    MappingEntry::new("Y", "ÝŶŸȲẎỲỴỶỸɎ"),
    MappingEntry::new("y", "ýÿŷȳẏẙỳỵỷỹɏ"),
    MappingEntry::new("Z", "ŹŻŽẐẒẔƵ"),
    MappingEntry::new("z", "źżžẑẓẕƶ"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_well_formed() {
        for entry in DIACRITIC_MAPPINGS {
            assert!(entry.is_well_formed(), "bad entry for {:?}", entry.base);
        }
    }

    #[test]
    fn test_bases_unique() {
        let mut seen = HashSet::new();
        for entry in DIACRITIC_MAPPINGS {
            assert!(seen.insert(&*entry.base), "duplicate base {}", entry.base);
        }
    }

    #[test]
    fn test_variants_unique_across_table() {
        let mut seen = HashSet::new();
        for entry in DIACRITIC_MAPPINGS {
            for ch in entry.chars() {
                assert!(seen.insert(ch), "variant {} listed twice", ch);
            }
        }
    }

    #[test]
    fn test_variant_case_matches_base() {
        for entry in DIACRITIC_MAPPINGS {
            let base = entry.base_char().unwrap();
            for ch in entry.chars() {
                assert_eq!(
                    ch.is_uppercase(),
                    base.is_uppercase(),
                    "{} vs base {}",
                    ch,
                    base
                );
            }
        }
    }
}
