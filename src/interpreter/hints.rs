/// Fallback category id ("Outros"); always present in the hint table
/// even when absent from the caller's live category set.
pub const FALLBACK_CATEGORY_ID: &str = "10";

/// Hand-authored pt-BR keyword hints per category id. A category scores
/// one point for each hint found as a substring of the lower-cased
/// description.
pub(crate) const CATEGORY_HINTS: &[(&str, &[&str])] = &[
    ("1", &["mercado", "supermercado", "compras"]),
    (
        "2",
        &["restaurante", "lanche", "almoço", "jantar", "café", "comida"],
    ),
    (
        "3",
        &[
            "transporte",
            "ônibus",
            "metrô",
            "gasolina",
            "combustível",
            "uber",
            "99",
            "táxi",
        ],
    ),
    (
        "4",
        &[
            "aluguel",
            "condomínio",
            "apartamento",
            "casa",
            "moradia",
            "água",
            "luz",
            "energia",
            "gás",
        ],
    ),
    ("5", &["trabalho", "escritório", "material", "equipamento"]),
    (
        "6",
        &["médico", "consulta", "farmácia", "remédio", "saúde", "hospital"],
    ),
    (
        "7",
        &[
            "cinema",
            "show",
            "entretenimento",
            "lazer",
            "jogos",
            "streaming",
            "netflix",
            "spotify",
            "diversão",
        ],
    ),
    ("8", &["viagem", "hotel", "passagem", "turismo"]),
    (
        "9",
        &[
            "banco",
            "investimento",
            "imposto",
            "financeiro",
            "empréstimo",
            "seguro",
        ],
    ),
    ("10", &["outros", "diversos", "compra"]),
    ("11", &["presente", "aniversário", "natal", "lembrança"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_id_is_in_the_table() {
        assert!(CATEGORY_HINTS
            .iter()
            .any(|(id, _)| *id == FALLBACK_CATEGORY_ID));
    }

    #[test]
    fn hints_are_lower_cased() {
        for (_, hints) in CATEGORY_HINTS {
            for hint in *hints {
                assert_eq!(*hint, hint.to_lowercase().as_str());
            }
        }
    }
}
