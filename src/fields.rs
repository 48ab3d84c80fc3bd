//! Static field, flag, and priority registries.
//!
//! These tables define every search field the compiler accepts, plus the
//! closed vocabularies for the `flag` and `prio` fields. They are plain
//! `'static` constants, never mutated, and safe to read from any thread.
//!
//! Lookup is exact and case-sensitive. That matters for flag shortcuts,
//! where `s` (signed) and `S` (seen) are different states.

/// How the compiler treats a field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Any expression value, formatted as `name:value`.
    Generic,
    /// Accepts interval values, formatted as `name:start..end`.
    Range,
    /// Closed vocabulary of message states.
    Flag,
    /// Exactly `low`, `normal`, or `high`.
    Priority,
}

/// A registered search field: one canonical name, zero or more aliases.
///
/// Aliases are not separate fields; they resolve to the same definition
/// and the canonical name is what appears in compiled output.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub kind: FieldKind,
}

/// Every field the search engine understands, keyed by canonical name.
pub static FIELDS: &[FieldDef] = &[
    FieldDef { name: "bcc", aliases: &["h"], kind: FieldKind::Generic },
    FieldDef { name: "body", aliases: &["b"], kind: FieldKind::Generic },
    FieldDef { name: "cc", aliases: &["c"], kind: FieldKind::Generic },
    FieldDef { name: "changed", aliases: &["k"], kind: FieldKind::Generic },
    FieldDef { name: "date", aliases: &["d"], kind: FieldKind::Range },
    FieldDef { name: "embed", aliases: &["e"], kind: FieldKind::Generic },
    FieldDef { name: "file", aliases: &["j"], kind: FieldKind::Generic },
    FieldDef { name: "flag", aliases: &["flags", "g"], kind: FieldKind::Flag },
    FieldDef { name: "from", aliases: &["f"], kind: FieldKind::Generic },
    FieldDef { name: "lang", aliases: &["l"], kind: FieldKind::Generic },
    FieldDef { name: "list", aliases: &["v"], kind: FieldKind::Generic },
    FieldDef { name: "maildir", aliases: &["m"], kind: FieldKind::Generic },
    FieldDef { name: "mime", aliases: &["y"], kind: FieldKind::Generic },
    FieldDef { name: "msgid", aliases: &["i"], kind: FieldKind::Generic },
    FieldDef { name: "path", aliases: &[], kind: FieldKind::Generic },
    FieldDef { name: "prio", aliases: &["priority"], kind: FieldKind::Priority },
    FieldDef { name: "references", aliases: &["r"], kind: FieldKind::Generic },
    FieldDef { name: "size", aliases: &["z"], kind: FieldKind::Range },
    FieldDef { name: "subject", aliases: &["s"], kind: FieldKind::Generic },
    FieldDef { name: "tag", aliases: &["x"], kind: FieldKind::Generic },
    FieldDef { name: "thread", aliases: &[], kind: FieldKind::Generic },
    FieldDef { name: "to", aliases: &["t"], kind: FieldKind::Generic },
];

/// Resolve a field name or alias to its definition. Exact match only.
pub fn lookup(name: &str) -> Option<&'static FieldDef> {
    FIELDS
        .iter()
        .find(|f| f.name == name || f.aliases.contains(&name))
}

/// A message-state token queryable via the `flag` field.
#[derive(Debug, Clone, Copy)]
pub struct FlagDef {
    pub name: &'static str,
    /// One-character shortcut, case-sensitive.
    pub shortcut: &'static str,
}

/// The closed vocabulary of message states.
pub static FLAGS: &[FlagDef] = &[
    FlagDef { name: "attach", shortcut: "a" },
    FlagDef { name: "calendar", shortcut: "c" },
    FlagDef { name: "draft", shortcut: "D" },
    FlagDef { name: "encrypted", shortcut: "x" },
    FlagDef { name: "flagged", shortcut: "F" },
    FlagDef { name: "list", shortcut: "l" },
    FlagDef { name: "new", shortcut: "N" },
    FlagDef { name: "passed", shortcut: "P" },
    FlagDef { name: "personal", shortcut: "q" },
    FlagDef { name: "replied", shortcut: "R" },
    FlagDef { name: "seen", shortcut: "S" },
    FlagDef { name: "signed", shortcut: "s" },
    FlagDef { name: "trashed", shortcut: "T" },
    FlagDef { name: "unread", shortcut: "u" },
];

/// Resolve a flag token, by full name or shortcut.
pub fn flag(token: &str) -> Option<&'static FlagDef> {
    FLAGS
        .iter()
        .find(|f| f.name == token || f.shortcut == token)
}

/// The closed set of priority tokens.
pub static PRIORITIES: &[&str] = &["low", "normal", "high"];

/// True if `token` is a valid priority.
pub fn is_priority(token: &str) -> bool {
    PRIORITIES.contains(&token)
}
