use crate::models::IssueLinkType;

/// A link request translated into JIRA's link type name and issue roles.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLink<'a> {
    pub type_name: String,
    pub inward: &'a str,
    pub outward: &'a str,
}

/// Map a requested link type onto a known link type.
///
/// An exact name match is used as-is. Otherwise the outward description
/// ("relates to", "blocks") selects that type, and the inward description
/// ("is blocked by") selects it with the issues swapped. Unknown types are
/// passed through so the server can reject them.
pub fn resolve_link<'a>(
    types: &[IssueLinkType],
    requested: &str,
    from: &'a str,
    to: &'a str,
) -> ResolvedLink<'a> {
    if types.iter().any(|t| t.name == requested) {
        return ResolvedLink {
            type_name: requested.to_string(),
            inward: from,
            outward: to,
        };
    }

    for link_type in types {
        if link_type.outward == requested {
            return ResolvedLink {
                type_name: link_type.name.clone(),
                inward: from,
                outward: to,
            };
        }
        if link_type.inward == requested {
            return ResolvedLink {
                type_name: link_type.name.clone(),
                inward: to,
                outward: from,
            };
        }
    }

    ResolvedLink {
        type_name: requested.to_string(),
        inward: from,
        outward: to,
    }
}
