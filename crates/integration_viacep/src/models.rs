//! ViaCEP response models

use serde::{Deserialize, Serialize};

/// Address record returned by ViaCEP for a known CEP
///
/// For an unknown (but well-formed) CEP, ViaCEP answers 200 with a body
/// of `{"erro": true}` and every other field absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViaCepResponse {
    /// CEP in ViaCEP's hyphenated formatting (e.g. "01310-930")
    #[serde(default)]
    pub cep: String,
    /// Street name
    #[serde(default)]
    pub logradouro: String,
    /// Address complement
    #[serde(default)]
    pub complemento: String,
    /// Neighborhood
    #[serde(default)]
    pub bairro: String,
    /// City name, the field downstream lookups key on
    #[serde(default)]
    pub localidade: String,
    /// Two-letter state code
    #[serde(default)]
    pub uf: String,
    /// IBGE municipality code
    #[serde(default)]
    pub ibge: String,
    /// GIA code (São Paulo state tax id)
    #[serde(default)]
    pub gia: String,
    /// Telephone area code
    #[serde(default)]
    pub ddd: String,
    /// SIAFI municipality code
    #[serde(default)]
    pub siafi: String,
    /// Not-found flag: present and true when the CEP does not exist
    #[serde(default)]
    pub erro: bool,
}
