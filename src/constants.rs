//! Cross-cutting, shared constants.
//!
//! Column names are the external contract of the chart-of-accounts workbook and
//! must match the header row byte for byte.

pub const COL_ACCOUNT_NUMBER: &str = "Sachkontonummer";
pub const COL_NAME: &str = "Kontenbezeichnung";
pub const COL_DESCRIPTION: &str = "Beschreibung";
pub const COL_POSITIVE: &str = "Positiv";
pub const COL_NEGATIVE: &str = "Negativ";
pub const COL_NEW_POSITION: &str = "Position neu";
pub const COL_NEW_POSITION_DESCRIPTION: &str = "Positionsbeschreibung neu";
pub const COL_SCORE: &str = "Score";

/// Columns the input table must carry, in output order.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    COL_ACCOUNT_NUMBER,
    COL_NAME,
    COL_DESCRIPTION,
    COL_POSITIVE,
    COL_NEGATIVE,
    COL_NEW_POSITION,
    COL_NEW_POSITION_DESCRIPTION,
];

/// Score cell marker of the synthetic first result row.
pub const INPUT_SENTINEL: &str = "INPUT";

/// Missing-value marker left behind by spreadsheet exports.
pub const MISSING_VALUE_SENTINEL: &str = "nan";

pub const POSITIVE_PREFIX: &str = "Positiv:";
pub const NEGATIVE_PREFIX: &str = "Negativ:";

pub const DEFAULT_TABLE_PATH: &str = "Konzernkontenplan_template.xlsx";
pub const DEFAULT_OUTPUT_PATH: &str = "Matching_Ergebnis_offline.xlsx";
pub const RESULT_SHEET_NAME: &str = "Matching";

pub const BASIC_THRESHOLDS: [f32; 1] = [0.50];
pub const CASCADING_THRESHOLDS: [f32; 3] = [0.60, 0.55, 0.50];

/// Fallback size of the cascading mode.
pub const DEFAULT_FALLBACK_K: usize = 5;

/// Decimal places of reported scores. Comparisons always use full precision.
pub const SCORE_DECIMALS: u32 = 2;

pub const FAST_MODEL_ID: &str = "sentence-transformers/paraphrase-multilingual-MiniLM-L12-v2";
pub const FAST_EMBEDDING_DIM: usize = 384;

pub const STRONG_MODEL_ID: &str = "sentence-transformers/paraphrase-multilingual-mpnet-base-v2";
pub const STRONG_EMBEDDING_DIM: usize = 768;

/// Token limit applied by the tokenizer before the forward pass.
pub const DEFAULT_MAX_SEQ_LEN: usize = 128;
