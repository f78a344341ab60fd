//! Stringprep profiles.
//!
//! A profile is plain data: which characters map to nothing, whether case
//! folding applies, which characters are prohibited and whether the bidi
//! rules run. All six profiles share one engine; [`Profile::new`] selects
//! their tables by matching on [`ProfileId`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PrepError, Result};
use crate::table::rfc3454::{
    B_1, B_2, C_1_1, C_1_2, C_2_1, C_2_2, C_3, C_4, C_5, C_6, C_7, C_8, C_9,
};
use crate::table::{CodepointRange, MappingTable, RangeTable};

/// The stringprep profiles this crate ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileId {
    /// RFC 4013, SASL user names and passwords.
    ///
    /// Case is preserved: SASLprep maps B.1 to nothing and non-ASCII spaces
    /// to U+0020, but applies no B.2 folding.
    SaslPrep,
    /// RFC 3491, internationalized domain labels.
    NamePrep,
    /// RFC 3920 appendix A, XMPP local parts.
    NodePrep,
    /// RFC 3920 appendix B, XMPP resource identifiers.
    ResourcePrep,
    /// RFC 3722, iSCSI names.
    IscsiPrep,
    /// RFC 4505, anonymous SASL trace tokens.
    TracePrep,
}

impl ProfileId {
    pub const ALL: [ProfileId; 6] = [
        ProfileId::SaslPrep,
        ProfileId::NamePrep,
        ProfileId::NodePrep,
        ProfileId::ResourcePrep,
        ProfileId::IscsiPrep,
        ProfileId::TracePrep,
    ];

    /// Name used in the defining RFC.
    pub fn name(self) -> &'static str {
        match self {
            Self::SaslPrep => "SASLprep",
            Self::NamePrep => "Nameprep",
            Self::NodePrep => "Nodeprep",
            Self::ResourcePrep => "Resourceprep",
            Self::IscsiPrep => "iSCSIprep",
            Self::TracePrep => "Traceprep",
        }
    }

    pub fn rfc(self) -> &'static str {
        match self {
            Self::SaslPrep => "RFC 4013",
            Self::NamePrep => "RFC 3491",
            Self::NodePrep | Self::ResourcePrep => "RFC 3920",
            Self::IscsiPrep => "RFC 3722",
            Self::TracePrep => "RFC 4505",
        }
    }

    /// Position in [`ProfileId::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProfileId {
    type Err = PrepError;

    /// Accepts the RFC names case-insensitively, with or without the
    /// "prep" suffix ("SASLprep", "nameprep", "iSCSI", "trace").
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        let key = key.strip_suffix("prep").unwrap_or(&key);
        match key {
            "sasl" => Ok(Self::SaslPrep),
            "name" => Ok(Self::NamePrep),
            "node" => Ok(Self::NodePrep),
            "resource" => Ok(Self::ResourcePrep),
            "iscsi" => Ok(Self::IscsiPrep),
            "trace" => Ok(Self::TracePrep),
            _ => Err(PrepError::UnknownProfile(s.to_string())),
        }
    }
}

/// Characters reserved in XMPP local parts: `" & / : < > @`.
static NODEPREP_RESERVED: RangeTable = RangeTable::from_static(&[
    CodepointRange::single(0x0022),
    CodepointRange::single(0x0026),
    CodepointRange::single(0x002F),
    CodepointRange::single(0x003A),
    CodepointRange::single(0x003C),
    CodepointRange::single(0x003E),
    CodepointRange::single(0x0040),
]);

/// RFC 3722 section 6: ASCII outside `-`, `.`, `:`, digits and letters,
/// the C1 block through NBSP, and the ideographic full stop.
static ISCSI_RESERVED: RangeTable = RangeTable::from_static(&[
    CodepointRange::new(0x0000, 0x002C),
    CodepointRange::single(0x002F),
    CodepointRange::new(0x003B, 0x0040),
    CodepointRange::new(0x005B, 0x0060),
    CodepointRange::new(0x007B, 0x00A0),
    CodepointRange::single(0x3002),
]);

static NO_RANGES: RangeTable = RangeTable::empty();

const SPACE: &[u32] = &[0x0020];

/// Immutable policy bundle driving one [`StringPrep`](crate::StringPrep).
#[derive(Clone)]
pub struct Profile {
    id: ProfileId,
    map_to_nothing: &'static RangeTable,
    map_to_space: Option<&'static RangeTable>,
    case_fold: Option<&'static MappingTable>,
    prohibited: RangeTable,
    bidi_check: bool,
}

impl Profile {
    pub fn new(id: ProfileId) -> Self {
        // Shared by Nameprep and the XMPP profiles.
        let nameprep_prohibited: [&RangeTable; 9] =
            [&C_1_2, &C_2_2, &C_3, &C_4, &C_5, &C_6, &C_7, &C_8, &C_9];

        match id {
            ProfileId::SaslPrep => Self {
                id,
                map_to_nothing: &B_1,
                map_to_space: Some(&C_1_2),
                case_fold: None,
                prohibited: RangeTable::union(&[
                    &C_1_2, &C_2_1, &C_2_2, &C_3, &C_4, &C_5, &C_6, &C_7, &C_8, &C_9,
                ]),
                bidi_check: true,
            },
            ProfileId::NamePrep => Self {
                id,
                map_to_nothing: &B_1,
                map_to_space: None,
                case_fold: Some(&B_2),
                prohibited: RangeTable::union(&nameprep_prohibited),
                bidi_check: true,
            },
            ProfileId::NodePrep => {
                let mut tables = nameprep_prohibited.to_vec();
                tables.extend([&C_1_1, &C_2_1, &NODEPREP_RESERVED]);
                Self {
                    id,
                    map_to_nothing: &B_1,
                    map_to_space: None,
                    case_fold: Some(&B_2),
                    prohibited: RangeTable::union(&tables),
                    bidi_check: true,
                }
            }
            ProfileId::ResourcePrep => {
                let mut tables = nameprep_prohibited.to_vec();
                tables.push(&C_2_1);
                Self {
                    id,
                    map_to_nothing: &B_1,
                    map_to_space: None,
                    case_fold: Some(&B_2),
                    prohibited: RangeTable::union(&tables),
                    bidi_check: true,
                }
            }
            ProfileId::IscsiPrep => {
                let mut tables = nameprep_prohibited.to_vec();
                tables.extend([&C_1_1, &C_2_1, &ISCSI_RESERVED]);
                Self {
                    id,
                    map_to_nothing: &B_1,
                    map_to_space: None,
                    case_fold: Some(&B_2),
                    prohibited: RangeTable::union(&tables),
                    bidi_check: true,
                }
            }
            // No C.1 (spaces survive) and no C.7.
            ProfileId::TracePrep => Self {
                id,
                map_to_nothing: &NO_RANGES,
                map_to_space: None,
                case_fold: None,
                prohibited: RangeTable::union(&[
                    &C_2_1, &C_2_2, &C_3, &C_4, &C_5, &C_6, &C_8, &C_9,
                ]),
                bidi_check: false,
            },
        }
    }

    pub fn id(&self) -> ProfileId {
        self.id
    }

    /// Mapping step for one code point.
    ///
    /// `None` passes the code point through, `Some(&[])` deletes it, anything
    /// else replaces it.
    #[inline]
    pub fn map(&self, cp: u32) -> Option<&'static [u32]> {
        if self.map_to_nothing.contains(cp) {
            return Some(&[]);
        }
        if let Some(spaces) = self.map_to_space {
            if spaces.contains(cp) {
                return Some(SPACE);
            }
        }
        self.case_fold.and_then(|table| table.map(cp))
    }

    #[inline]
    pub fn is_prohibited(&self, cp: u32) -> bool {
        self.prohibited.contains(cp)
    }

    pub fn prohibited(&self) -> &RangeTable {
        &self.prohibited
    }

    pub fn bidi_check_enabled(&self) -> bool {
        self.bidi_check
    }

    pub fn case_folds(&self) -> bool {
        self.case_fold.is_some()
    }

    /// True when the profile maps nothing at all.
    pub fn is_identity_map(&self) -> bool {
        self.map_to_nothing.is_empty() && self.map_to_space.is_none() && self.case_fold.is_none()
    }

    pub(crate) fn case_fold_len(&self) -> usize {
        self.case_fold.map_or(0, MappingTable::len)
    }
}

impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("id", &self.id)
            .field("maps_spaces", &self.map_to_space.is_some())
            .field("case_fold_entries", &self.case_fold_len())
            .field("prohibited_ranges", &self.prohibited.len())
            .field("bidi_check", &self.bidi_check)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc_names() {
        assert_eq!("SASLprep".parse::<ProfileId>().unwrap(), ProfileId::SaslPrep);
        assert_eq!("nameprep".parse::<ProfileId>().unwrap(), ProfileId::NamePrep);
        assert_eq!("Node".parse::<ProfileId>().unwrap(), ProfileId::NodePrep);
        assert_eq!("resource-prep".parse::<ProfileId>().unwrap(), ProfileId::ResourcePrep);
        assert_eq!("iSCSI".parse::<ProfileId>().unwrap(), ProfileId::IscsiPrep);
        assert_eq!("trace".parse::<ProfileId>().unwrap(), ProfileId::TracePrep);
        assert!(matches!(
            "idna".parse::<ProfileId>(),
            Err(PrepError::UnknownProfile(name)) if name == "idna"
        ));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for id in ProfileId::ALL {
            assert_eq!(id.to_string().parse::<ProfileId>().unwrap(), id);
        }
    }

    #[test]
    fn index_matches_all_order() {
        for (i, id) in ProfileId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn merged_prohibited_tables_are_well_formed() {
        for id in ProfileId::ALL {
            Profile::new(id).prohibited().validate().unwrap();
        }
    }

    #[test]
    fn flags_per_profile() {
        let sasl = Profile::new(ProfileId::SaslPrep);
        assert!(sasl.bidi_check_enabled());
        assert!(!sasl.case_folds());

        let name = Profile::new(ProfileId::NamePrep);
        assert!(name.bidi_check_enabled());
        assert!(name.case_folds());

        let trace = Profile::new(ProfileId::TracePrep);
        assert!(!trace.bidi_check_enabled());
        assert!(trace.is_identity_map());
    }

    #[test]
    fn map_order_is_delete_then_space_then_fold() {
        let sasl = Profile::new(ProfileId::SaslPrep);
        assert_eq!(sasl.map(0x00AD), Some(&[][..]));
        assert_eq!(sasl.map(0x00A0), Some(&[0x20][..]));
        // ZERO WIDTH SPACE is in both B.1 and C.1.2; deletion wins.
        assert_eq!(sasl.map(0x200B), Some(&[][..]));
        assert_eq!(sasl.map('A' as u32), None);

        let name = Profile::new(ProfileId::NamePrep);
        assert_eq!(name.map('A' as u32), Some(&[0x61][..]));
        assert_eq!(name.map(0x00DF), Some(&[0x73, 0x73][..]));
        assert_eq!(name.map(0x00A0), None);
    }

    #[test]
    fn reserved_punctuation() {
        let node = Profile::new(ProfileId::NodePrep);
        for c in ['"', '&', '/', ':', '<', '>', '@', ' '] {
            assert!(node.is_prohibited(c as u32), "{c:?}");
        }
        assert!(!node.is_prohibited('.' as u32));

        let resource = Profile::new(ProfileId::ResourcePrep);
        for c in ['"', '&', '/', ':', '<', '>', '@', ' '] {
            assert!(!resource.is_prohibited(c as u32), "{c:?}");
        }

        let iscsi = Profile::new(ProfileId::IscsiPrep);
        for c in [',', '/', ';', '@', '[', '`', '{', '\u{7F}', '\u{A0}', '\u{3002}'] {
            assert!(iscsi.is_prohibited(c as u32), "{c:?}");
        }
        for c in ['-', '.', ':', '0', 'a'] {
            assert!(!iscsi.is_prohibited(c as u32), "{c:?}");
        }
    }
}
