use candle::{DType, Device, Result, Tensor};
use candle_core as candle;
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{self, BertModel};
use candle_transformers::models::xlm_roberta::{self, XLMRobertaModel};
use std::path::Path;
use std::sync::Arc;

const XLM_ROBERTA_MODEL_TYPE: &str = "xlm-roberta";

enum Backbone {
    Bert(BertModel),
    /// Positions start after the padding index, unlike BERT.
    XlmRoberta(XLMRobertaModel),
}

/// BERT-family encoder returning per-token hidden states.
///
/// `config.json` with `model_type: "xlm-roberta"` loads the XLM-R
/// architecture; everything else loads as BERT. Checkpoints saved with a
/// `bert.` or `roberta.` prefix and bare sentence-transformers exports are
/// both accepted.
#[derive(Clone)]
pub struct BertEncoder {
    model: Arc<Backbone>,
    hidden_size: usize,
}

impl BertEncoder {
    pub fn load<P: AsRef<Path>>(model_dir: P, device: &Device) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        let config_path = model_dir.join("config.json");
        let weights_path = model_dir.join("model.safetensors");

        let config_content = std::fs::read_to_string(config_path)?;
        let header = read_header(&config_content)?;

        let vb =
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)? };
        let vb = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            vb.pp("bert")
        } else if vb.contains_tensor("roberta.embeddings.word_embeddings.weight") {
            vb.pp("roberta")
        } else {
            vb
        };

        let model = if header.is_xlm_roberta() {
            let config: xlm_roberta::Config = parse_config(&config_content)?;
            Backbone::XlmRoberta(XLMRobertaModel::new(&config, vb)?)
        } else {
            let config: bert::Config = parse_config(&config_content)?;
            Backbone::Bert(BertModel::load(vb, &config)?)
        };

        Ok(Self {
            model: Arc::new(model),
            hidden_size: header.hidden_size,
        })
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    pub fn is_xlm_roberta(&self) -> bool {
        matches!(*self.model, Backbone::XlmRoberta(_))
    }

    /// Returns hidden states of shape `[batch, seq_len, hidden_size]`.
    pub fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: Option<&Tensor>,
    ) -> Result<Tensor> {
        match &*self.model {
            Backbone::Bert(model) => model.forward(input_ids, token_type_ids, attention_mask),
            Backbone::XlmRoberta(model) => {
                let mask = match attention_mask {
                    Some(mask) => mask.clone(),
                    None => input_ids.ones_like()?,
                };
                model.forward(input_ids, &mask, token_type_ids, None, None, None)
            }
        }
    }
}

#[derive(serde::Deserialize)]
struct ConfigHeader {
    hidden_size: usize,
    #[serde(default)]
    model_type: Option<String>,
}

impl ConfigHeader {
    fn is_xlm_roberta(&self) -> bool {
        self.model_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case(XLM_ROBERTA_MODEL_TYPE))
    }
}

fn read_header(config_content: &str) -> Result<ConfigHeader> {
    serde_json::from_str(config_content)
        .map_err(|e| candle::Error::Msg(format!("config.json lacks hidden_size: {}", e)))
}

fn parse_config<T: serde::de::DeserializeOwned>(config_content: &str) -> Result<T> {
    serde_json::from_str(config_content)
        .map_err(|e| candle::Error::Msg(format!("Failed to parse config: {}", e)))
}
