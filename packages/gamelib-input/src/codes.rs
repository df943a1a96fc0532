//! Key-code name tables.
//!
//! Codes are the legacy DOM `keyCode` values. Letters and digits are not
//! listed here; their names are derived from the code itself.

pub const BACKSPACE: u32 = 8;
pub const SHIFT: u32 = 16;
pub const CONTROL: u32 = 17;

/// Names of a key when shift is not involved.
pub fn key_names(code: u32) -> &'static [&'static str] {
    match code {
        8 => &["backspace"],
        9 => &["tab"],
        13 => &["return", "enter"],
        16 => &["shift"],
        17 => &["control"],
        18 => &["option"],
        27 => &["escape"],
        32 => &["space"],
        37 => &["left"],
        38 => &["up"],
        39 => &["right"],
        40 => &["down"],
        46 => &["delete"],
        91 | 92 => &["command"],
        112 => &["F1"],
        113 => &["F2"],
        114 => &["F3"],
        115 => &["F4"],
        116 => &["F5"],
        117 => &["F6"],
        118 => &["F7"],
        119 => &["F8"],
        120 => &["F9"],
        121 => &["F10"],
        122 => &["F11"],
        123 => &["F12"],
        186 => &[";", "semicolon"],
        187 => &["=", "equals"],
        188 => &[",", "comma"],
        189 => &["-", "dash", "minus"],
        190 => &[".", "period"],
        191 => &["/", "slash"],
        192 => &["`", "backquote", "backtick"],
        219 => &["[", "lbracket", "left-bracket"],
        220 => &["\\", "backslash"],
        221 => &["]", "rbracket", "right-bracket"],
        222 => &["'", "single-quote"],
        _ => &[],
    }
}

/// Names a key produces while shift is held. Empty when shift does not
/// change the key.
pub fn shift_key_names(code: u32) -> &'static [&'static str] {
    match code {
        48 => &[")", "close-paren"],
        49 => &["!", "exclamation-point"],
        50 => &["@", "at-sign"],
        51 => &["#", "pound", "number-sign", "octothorpe"],
        52 => &["$", "dollar-sign"],
        53 => &["%", "percent-sign"],
        54 => &["^", "caret", "hat", "uparrow"],
        55 => &["&", "ampersand"],
        56 => &["*", "star", "asterisk"],
        57 => &["(", "open-paren"],
        186 => &[":", "colon"],
        187 => &["+", "plus"],
        188 => &["<", "less-than", "left-angle", "langle"],
        189 => &["_", "underscore"],
        190 => &[">", "greater-than", "right-angle", "rangle"],
        191 => &["?", "question-mark"],
        192 => &["~", "tilde", "squiggly"],
        219 => &["{", "lbrace", "left-brace"],
        220 => &["|", "pipe", "bar"],
        221 => &["}", "rbrace", "right-brace"],
        222 => &["\"", "quote", "double-quote"],
        _ => &[],
    }
}

pub fn is_letter(code: u32) -> bool {
    (65..=90).contains(&code)
}

pub fn is_digit(code: u32) -> bool {
    (48..=57).contains(&code)
}
