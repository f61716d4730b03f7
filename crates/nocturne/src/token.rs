//! Token category definitions - single source of truth.
//!
//! This module defines the closed, hierarchical vocabulary of token
//! categories assigned by the highlighting engine's lexers. Category names
//! are dotted paths (`Comment.Preproc`, `Name.Class`); each two-segment
//! name has the single-segment name as its parent, which is what makes
//! style fallback work: a theme that only styles `String` still styles
//! `String.Char`, `String.Escape`, and friends.
//!
//! The vocabulary is owned by the engine, not by themes: themes can only
//! assign styles to categories listed here, and [`TokenCategory::parse`]
//! rejects anything else.

use std::fmt;

/// A token category the highlighting engine may assign to a span of
/// source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Text,
    Whitespace,
    Error,
    Other,
    Comment,
    CommentHashbang,
    CommentMultiline,
    CommentPreproc,
    CommentPreprocFile,
    CommentSingle,
    CommentSpecial,
    Keyword,
    KeywordConstant,
    KeywordDeclaration,
    KeywordNamespace,
    KeywordPseudo,
    KeywordReserved,
    KeywordType,
    Name,
    NameAttribute,
    NameBuiltin,
    NameClass,
    NameConstant,
    NameDecorator,
    NameEntity,
    NameException,
    NameFunction,
    NameLabel,
    NameNamespace,
    NameTag,
    NameVariable,
    Literal,
    String,
    StringChar,
    StringDoc,
    StringDouble,
    StringEscape,
    StringInterpol,
    StringOther,
    StringRegex,
    StringSingle,
    StringSymbol,
    Number,
    NumberBin,
    NumberFloat,
    NumberHex,
    NumberInteger,
    NumberOct,
    Operator,
    OperatorWord,
    Punctuation,
    Generic,
    GenericDeleted,
    GenericEmph,
    GenericError,
    GenericHeading,
    GenericInserted,
    GenericOutput,
    GenericPrompt,
    GenericStrong,
    GenericSubheading,
    GenericTraceback,
}

/// All token categories, in canonical order.
///
/// This order is used wherever deterministic output matters (CSS emission,
/// serialization of the effective mapping).
pub const ALL: &[TokenCategory] = &[
    TokenCategory::Text,
    TokenCategory::Whitespace,
    TokenCategory::Error,
    TokenCategory::Other,
    TokenCategory::Comment,
    TokenCategory::CommentHashbang,
    TokenCategory::CommentMultiline,
    TokenCategory::CommentPreproc,
    TokenCategory::CommentPreprocFile,
    TokenCategory::CommentSingle,
    TokenCategory::CommentSpecial,
    TokenCategory::Keyword,
    TokenCategory::KeywordConstant,
    TokenCategory::KeywordDeclaration,
    TokenCategory::KeywordNamespace,
    TokenCategory::KeywordPseudo,
    TokenCategory::KeywordReserved,
    TokenCategory::KeywordType,
    TokenCategory::Name,
    TokenCategory::NameAttribute,
    TokenCategory::NameBuiltin,
    TokenCategory::NameClass,
    TokenCategory::NameConstant,
    TokenCategory::NameDecorator,
    TokenCategory::NameEntity,
    TokenCategory::NameException,
    TokenCategory::NameFunction,
    TokenCategory::NameLabel,
    TokenCategory::NameNamespace,
    TokenCategory::NameTag,
    TokenCategory::NameVariable,
    TokenCategory::Literal,
    TokenCategory::String,
    TokenCategory::StringChar,
    TokenCategory::StringDoc,
    TokenCategory::StringDouble,
    TokenCategory::StringEscape,
    TokenCategory::StringInterpol,
    TokenCategory::StringOther,
    TokenCategory::StringRegex,
    TokenCategory::StringSingle,
    TokenCategory::StringSymbol,
    TokenCategory::Number,
    TokenCategory::NumberBin,
    TokenCategory::NumberFloat,
    TokenCategory::NumberHex,
    TokenCategory::NumberInteger,
    TokenCategory::NumberOct,
    TokenCategory::Operator,
    TokenCategory::OperatorWord,
    TokenCategory::Punctuation,
    TokenCategory::Generic,
    TokenCategory::GenericDeleted,
    TokenCategory::GenericEmph,
    TokenCategory::GenericError,
    TokenCategory::GenericHeading,
    TokenCategory::GenericInserted,
    TokenCategory::GenericOutput,
    TokenCategory::GenericPrompt,
    TokenCategory::GenericStrong,
    TokenCategory::GenericSubheading,
    TokenCategory::GenericTraceback,
];

impl TokenCategory {
    /// The canonical dotted name, as it appears in theme files.
    pub fn name(self) -> &'static str {
        match self {
            TokenCategory::Text => "Text",
            TokenCategory::Whitespace => "Whitespace",
            TokenCategory::Error => "Error",
            TokenCategory::Other => "Other",
            TokenCategory::Comment => "Comment",
            TokenCategory::CommentHashbang => "Comment.Hashbang",
            TokenCategory::CommentMultiline => "Comment.Multiline",
            TokenCategory::CommentPreproc => "Comment.Preproc",
            TokenCategory::CommentPreprocFile => "Comment.PreprocFile",
            TokenCategory::CommentSingle => "Comment.Single",
            TokenCategory::CommentSpecial => "Comment.Special",
            TokenCategory::Keyword => "Keyword",
            TokenCategory::KeywordConstant => "Keyword.Constant",
            TokenCategory::KeywordDeclaration => "Keyword.Declaration",
            TokenCategory::KeywordNamespace => "Keyword.Namespace",
            TokenCategory::KeywordPseudo => "Keyword.Pseudo",
            TokenCategory::KeywordReserved => "Keyword.Reserved",
            TokenCategory::KeywordType => "Keyword.Type",
            TokenCategory::Name => "Name",
            TokenCategory::NameAttribute => "Name.Attribute",
            TokenCategory::NameBuiltin => "Name.Builtin",
            TokenCategory::NameClass => "Name.Class",
            TokenCategory::NameConstant => "Name.Constant",
            TokenCategory::NameDecorator => "Name.Decorator",
            TokenCategory::NameEntity => "Name.Entity",
            TokenCategory::NameException => "Name.Exception",
            TokenCategory::NameFunction => "Name.Function",
            TokenCategory::NameLabel => "Name.Label",
            TokenCategory::NameNamespace => "Name.Namespace",
            TokenCategory::NameTag => "Name.Tag",
            TokenCategory::NameVariable => "Name.Variable",
            TokenCategory::Literal => "Literal",
            TokenCategory::String => "String",
            TokenCategory::StringChar => "String.Char",
            TokenCategory::StringDoc => "String.Doc",
            TokenCategory::StringDouble => "String.Double",
            TokenCategory::StringEscape => "String.Escape",
            TokenCategory::StringInterpol => "String.Interpol",
            TokenCategory::StringOther => "String.Other",
            TokenCategory::StringRegex => "String.Regex",
            TokenCategory::StringSingle => "String.Single",
            TokenCategory::StringSymbol => "String.Symbol",
            TokenCategory::Number => "Number",
            TokenCategory::NumberBin => "Number.Bin",
            TokenCategory::NumberFloat => "Number.Float",
            TokenCategory::NumberHex => "Number.Hex",
            TokenCategory::NumberInteger => "Number.Integer",
            TokenCategory::NumberOct => "Number.Oct",
            TokenCategory::Operator => "Operator",
            TokenCategory::OperatorWord => "Operator.Word",
            TokenCategory::Punctuation => "Punctuation",
            TokenCategory::Generic => "Generic",
            TokenCategory::GenericDeleted => "Generic.Deleted",
            TokenCategory::GenericEmph => "Generic.Emph",
            TokenCategory::GenericError => "Generic.Error",
            TokenCategory::GenericHeading => "Generic.Heading",
            TokenCategory::GenericInserted => "Generic.Inserted",
            TokenCategory::GenericOutput => "Generic.Output",
            TokenCategory::GenericPrompt => "Generic.Prompt",
            TokenCategory::GenericStrong => "Generic.Strong",
            TokenCategory::GenericSubheading => "Generic.Subheading",
            TokenCategory::GenericTraceback => "Generic.Traceback",
        }
    }

    /// Parse a canonical dotted name.
    ///
    /// The vocabulary is closed: any name not listed in [`ALL`] returns
    /// `None`. Callers wanting an error type should wrap this (see
    /// `ThemeError::UnknownCategory`).
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Text" => Some(TokenCategory::Text),
            "Whitespace" => Some(TokenCategory::Whitespace),
            "Error" => Some(TokenCategory::Error),
            "Other" => Some(TokenCategory::Other),
            "Comment" => Some(TokenCategory::Comment),
            "Comment.Hashbang" => Some(TokenCategory::CommentHashbang),
            "Comment.Multiline" => Some(TokenCategory::CommentMultiline),
            "Comment.Preproc" => Some(TokenCategory::CommentPreproc),
            "Comment.PreprocFile" => Some(TokenCategory::CommentPreprocFile),
            "Comment.Single" => Some(TokenCategory::CommentSingle),
            "Comment.Special" => Some(TokenCategory::CommentSpecial),
            "Keyword" => Some(TokenCategory::Keyword),
            "Keyword.Constant" => Some(TokenCategory::KeywordConstant),
            "Keyword.Declaration" => Some(TokenCategory::KeywordDeclaration),
            "Keyword.Namespace" => Some(TokenCategory::KeywordNamespace),
            "Keyword.Pseudo" => Some(TokenCategory::KeywordPseudo),
            "Keyword.Reserved" => Some(TokenCategory::KeywordReserved),
            "Keyword.Type" => Some(TokenCategory::KeywordType),
            "Name" => Some(TokenCategory::Name),
            "Name.Attribute" => Some(TokenCategory::NameAttribute),
            "Name.Builtin" => Some(TokenCategory::NameBuiltin),
            "Name.Class" => Some(TokenCategory::NameClass),
            "Name.Constant" => Some(TokenCategory::NameConstant),
            "Name.Decorator" => Some(TokenCategory::NameDecorator),
            "Name.Entity" => Some(TokenCategory::NameEntity),
            "Name.Exception" => Some(TokenCategory::NameException),
            "Name.Function" => Some(TokenCategory::NameFunction),
            "Name.Label" => Some(TokenCategory::NameLabel),
            "Name.Namespace" => Some(TokenCategory::NameNamespace),
            "Name.Tag" => Some(TokenCategory::NameTag),
            "Name.Variable" => Some(TokenCategory::NameVariable),
            "Literal" => Some(TokenCategory::Literal),
            "String" => Some(TokenCategory::String),
            "String.Char" => Some(TokenCategory::StringChar),
            "String.Doc" => Some(TokenCategory::StringDoc),
            "String.Double" => Some(TokenCategory::StringDouble),
            "String.Escape" => Some(TokenCategory::StringEscape),
            "String.Interpol" => Some(TokenCategory::StringInterpol),
            "String.Other" => Some(TokenCategory::StringOther),
            "String.Regex" => Some(TokenCategory::StringRegex),
            "String.Single" => Some(TokenCategory::StringSingle),
            "String.Symbol" => Some(TokenCategory::StringSymbol),
            "Number" => Some(TokenCategory::Number),
            "Number.Bin" => Some(TokenCategory::NumberBin),
            "Number.Float" => Some(TokenCategory::NumberFloat),
            "Number.Hex" => Some(TokenCategory::NumberHex),
            "Number.Integer" => Some(TokenCategory::NumberInteger),
            "Number.Oct" => Some(TokenCategory::NumberOct),
            "Operator" => Some(TokenCategory::Operator),
            "Operator.Word" => Some(TokenCategory::OperatorWord),
            "Punctuation" => Some(TokenCategory::Punctuation),
            "Generic" => Some(TokenCategory::Generic),
            "Generic.Deleted" => Some(TokenCategory::GenericDeleted),
            "Generic.Emph" => Some(TokenCategory::GenericEmph),
            "Generic.Error" => Some(TokenCategory::GenericError),
            "Generic.Heading" => Some(TokenCategory::GenericHeading),
            "Generic.Inserted" => Some(TokenCategory::GenericInserted),
            "Generic.Output" => Some(TokenCategory::GenericOutput),
            "Generic.Prompt" => Some(TokenCategory::GenericPrompt),
            "Generic.Strong" => Some(TokenCategory::GenericStrong),
            "Generic.Subheading" => Some(TokenCategory::GenericSubheading),
            "Generic.Traceback" => Some(TokenCategory::GenericTraceback),
            _ => None,
        }
    }

    /// One step up the category hierarchy.
    ///
    /// `Name.Class` → `Name`, `Comment.PreprocFile` → `Comment`. Top-level
    /// categories have no parent.
    pub fn parent(self) -> Option<Self> {
        let name = self.name();
        let (head, _) = name.split_once('.')?;
        // Every two-segment name has its head as a valid category.
        TokenCategory::parse(head)
    }

    /// The engine's conventional short CSS class for this category.
    ///
    /// Returns `None` for `Text`, which is rendered without a class.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            TokenCategory::Text => None,
            TokenCategory::Whitespace => Some("w"),
            TokenCategory::Error => Some("err"),
            TokenCategory::Other => Some("x"),
            TokenCategory::Comment => Some("c"),
            TokenCategory::CommentHashbang => Some("ch"),
            TokenCategory::CommentMultiline => Some("cm"),
            TokenCategory::CommentPreproc => Some("cp"),
            TokenCategory::CommentPreprocFile => Some("cpf"),
            TokenCategory::CommentSingle => Some("c1"),
            TokenCategory::CommentSpecial => Some("cs"),
            TokenCategory::Keyword => Some("k"),
            TokenCategory::KeywordConstant => Some("kc"),
            TokenCategory::KeywordDeclaration => Some("kd"),
            TokenCategory::KeywordNamespace => Some("kn"),
            TokenCategory::KeywordPseudo => Some("kp"),
            TokenCategory::KeywordReserved => Some("kr"),
            TokenCategory::KeywordType => Some("kt"),
            TokenCategory::Name => Some("n"),
            TokenCategory::NameAttribute => Some("na"),
            TokenCategory::NameBuiltin => Some("nb"),
            TokenCategory::NameClass => Some("nc"),
            TokenCategory::NameConstant => Some("no"),
            TokenCategory::NameDecorator => Some("nd"),
            TokenCategory::NameEntity => Some("ni"),
            TokenCategory::NameException => Some("ne"),
            TokenCategory::NameFunction => Some("nf"),
            TokenCategory::NameLabel => Some("nl"),
            TokenCategory::NameNamespace => Some("nn"),
            TokenCategory::NameTag => Some("nt"),
            TokenCategory::NameVariable => Some("nv"),
            TokenCategory::Literal => Some("l"),
            TokenCategory::String => Some("s"),
            TokenCategory::StringChar => Some("sc"),
            TokenCategory::StringDoc => Some("sd"),
            TokenCategory::StringDouble => Some("s2"),
            TokenCategory::StringEscape => Some("se"),
            TokenCategory::StringInterpol => Some("si"),
            TokenCategory::StringOther => Some("sx"),
            TokenCategory::StringRegex => Some("sr"),
            TokenCategory::StringSingle => Some("s1"),
            TokenCategory::StringSymbol => Some("ss"),
            TokenCategory::Number => Some("m"),
            TokenCategory::NumberBin => Some("mb"),
            TokenCategory::NumberFloat => Some("mf"),
            TokenCategory::NumberHex => Some("mh"),
            TokenCategory::NumberInteger => Some("mi"),
            TokenCategory::NumberOct => Some("mo"),
            TokenCategory::Operator => Some("o"),
            TokenCategory::OperatorWord => Some("ow"),
            TokenCategory::Punctuation => Some("p"),
            TokenCategory::Generic => Some("g"),
            TokenCategory::GenericDeleted => Some("gd"),
            TokenCategory::GenericEmph => Some("ge"),
            TokenCategory::GenericError => Some("gr"),
            TokenCategory::GenericHeading => Some("gh"),
            TokenCategory::GenericInserted => Some("gi"),
            TokenCategory::GenericOutput => Some("go"),
            TokenCategory::GenericPrompt => Some("gp"),
            TokenCategory::GenericStrong => Some("gs"),
            TokenCategory::GenericSubheading => Some("gu"),
            TokenCategory::GenericTraceback => Some("gt"),
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
