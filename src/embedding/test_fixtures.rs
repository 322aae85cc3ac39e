//! Tiny random checkpoints on disk for exercising the real model path.

use std::path::Path;

use candle_core::{DType, Device};
use candle_nn::{VarBuilder, VarMap};
use candle_transformers::models::bert::{self, BertModel};
use candle_transformers::models::xlm_roberta::{self, XLMRobertaModel};

pub const TINY_HIDDEN: usize = 8;
pub const TINY_PAD_ID: u32 = 1;

const VOCAB: [&str; 14] = [
    "[UNK]",
    "[PAD]",
    "Kasse",
    "Bank",
    "Guthaben",
    "bei",
    "Kreditinstituten",
    "Bargeld",
    "Umsatz",
    "Steuern",
    "Positiv",
    "Negativ",
    ":",
    "Konto",
];

fn config_json(model_type: &str) -> String {
    serde_json::json!({
        "model_type": model_type,
        "vocab_size": VOCAB.len(),
        "hidden_size": TINY_HIDDEN,
        "num_hidden_layers": 1,
        "num_attention_heads": 2,
        "intermediate_size": 16,
        "hidden_act": "gelu",
        "hidden_dropout_prob": 0.0,
        "attention_probs_dropout_prob": 0.0,
        "max_position_embeddings": 40,
        "type_vocab_size": 1,
        "initializer_range": 0.02,
        "layer_norm_eps": 1e-5,
        "pad_token_id": TINY_PAD_ID,
        "bos_token_id": 0,
        "eos_token_id": 2,
        "position_embedding_type": "absolute",
        "use_cache": true,
        "classifier_dropout": null
    })
    .to_string()
}

/// Writes a word-level `tokenizer.json` over the fixture vocabulary.
pub fn write_tokenizer(dir: &Path) {
    let vocab: serde_json::Map<String, serde_json::Value> = VOCAB
        .iter()
        .enumerate()
        .map(|(id, token)| (token.to_string(), serde_json::json!(id)))
        .collect();

    let tokenizer = serde_json::json!({
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": [],
        "normalizer": null,
        "pre_tokenizer": { "type": "Whitespace" },
        "post_processor": null,
        "decoder": null,
        "model": { "type": "WordLevel", "vocab": vocab, "unk_token": "[UNK]" }
    });

    std::fs::write(dir.join("tokenizer.json"), tokenizer.to_string()).unwrap();
}

/// Writes a random BERT checkpoint (config and weights) into `dir`.
pub fn write_bert_checkpoint(dir: &Path) -> BertModel {
    let config_content = config_json("bert");
    let config: bert::Config = serde_json::from_str(&config_content).unwrap();

    let varmap = VarMap::new();
    let vb = VarBuilder::from_varmap(&varmap, DType::F32, &Device::Cpu);
    let model = BertModel::load(vb, &config).unwrap();

    std::fs::write(dir.join("config.json"), config_content).unwrap();
    varmap.save(dir.join("model.safetensors")).unwrap();
    model
}

/// Writes a random XLM-R checkpoint into `dir` and returns the reference model.
pub fn write_xlm_roberta_checkpoint(dir: &Path) -> XLMRobertaModel {
    let config_content = config_json("xlm-roberta");
    let config: xlm_roberta::Config = serde_json::from_str(&config_content).unwrap();

    let varmap = VarMap::new();
    let vb = VarBuilder::from_varmap(&varmap, DType::F32, &Device::Cpu);
    let model = XLMRobertaModel::new(&config, vb).unwrap();

    std::fs::write(dir.join("config.json"), config_content).unwrap();
    varmap.save(dir.join("model.safetensors")).unwrap();
    model
}
