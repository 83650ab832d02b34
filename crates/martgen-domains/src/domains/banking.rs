//! Banking domain: account holders and card transactions.
//!
//! The fact table carries the derivation chain: transaction value narrowed
//! by the holder's card tier, due date offset from the transaction date,
//! payment date jittered around the due date, and interest accrued from the
//! late days.

use super::*;
use martgen_core::{
    DeriveRule, DimensionSchema, DomainSchema, FactColumn, FactSchema, SamplerRule, TierBand,
};

/// Canonical purchase category to establishment table.
fn establishment_pairs() -> Vec<(String, Vec<String>)> {
    let pairs: [(&str, &[&str]); 8] = [
        (
            "Alimentação",
            &[
                "Restaurante Gourmet",
                "Fast Food",
                "Padaria Premium",
                "Cafeteria Especializada",
                "Mercado Orgânico",
            ],
        ),
        (
            "Transporte",
            &[
                "Aplicativo de Mobilidade",
                "Posto de Combustível",
                "Estacionamento",
                "Pedágio",
                "Locadora de Veículos",
            ],
        ),
        (
            "Entretenimento",
            &[
                "Cinema Premium",
                "Teatro Municipal",
                "Streaming",
                "Casa de Shows",
                "Parque Temático",
            ],
        ),
        (
            "Saúde",
            &[
                "Farmácia",
                "Academia Premium",
                "Clínica Especializada",
                "Laboratório",
                "Plano de Saúde",
            ],
        ),
        (
            "Educação",
            &[
                "Livraria",
                "Curso Online",
                "Material Escolar",
                "Mensalidade",
                "Plataforma Educacional",
            ],
        ),
        (
            "Vestuário",
            &[
                "Loja de Departamento",
                "Boutique de Luxo",
                "Fast Fashion",
                "Outlet Premium",
                "E-commerce",
            ],
        ),
        (
            "Serviços",
            &[
                "Assinatura Digital",
                "Serviço de Streaming",
                "Aplicativo Premium",
                "Seguro",
                "Manutenção",
            ],
        ),
        (
            "Viagem",
            &[
                "Companhia Aérea",
                "Hotel de Luxo",
                "Agência de Viagens",
                "Cruzeiro",
                "Aluguel por Temporada",
            ],
        ),
    ];

    pairs
        .iter()
        .map(|(category, establishments)| {
            (
                (*category).to_string(),
                establishments.iter().map(|e| (*e).to_string()).collect(),
            )
        })
        .collect()
}

pub(crate) fn schema() -> DomainSchema {
    let dimension = DimensionSchema {
        table: "clientes".to_string(),
        key_column: "CPF".to_string(),
        columns: vec![
            col("CPF", SamplerRule::Cpf),
            col("Nome", SamplerRule::FullName),
            col(
                "Data_Nascimento",
                date(DateSpec::YearsAgo(80), DateSpec::YearsAgo(18)),
            ),
            col("Email", SamplerRule::Email),
            col("Telefone", SamplerRule::Phone),
            col("Endereco", SamplerRule::StreetAddress),
            col("Cidade", SamplerRule::City),
            col("Estado", SamplerRule::StateCode),
            col("CEP", SamplerRule::PostalCode),
            col("Renda_Mensal", amount(1500.0, 30000.0)),
            col("Score_Credito", integer(100, 1000)),
            col(
                "Tipo_Conta",
                cat(&["Corrente", "Poupança", "Salário", "Digital", "Premium", "Universitária"]),
            ),
            col(
                "Data_Abertura_Conta",
                date(DateSpec::YearsAgo(10), DateSpec::Today),
            ),
            col("Saldo_Atual", amount(-1000.0, 50000.0)),
            col("Limite_Credito", amount(500.0, 25000.0)),
            col(
                "Tipo_Cartao",
                cat(&[
                    "Básico",
                    "Gold",
                    "Platinum",
                    "Black",
                    "Infinite",
                    "Corporate",
                    "Empresarial",
                    "Sem Cartão",
                ]),
            ),
            col(
                "Programa_Fidelidade",
                cat(&["Pontos Básico", "Milhas Premium", "Cashback", "Rewards Plus", "Nenhum"]),
            ),
            col(
                "Segmento",
                cat(&["Varejo", "Alta Renda", "Private", "Corporate", "Empresarial", "Universitário"]),
            ),
        ],
    };

    let facts = FactSchema {
        table: "transacoes".to_string(),
        columns: vec![
            FactColumn::foreign_key("CPF"),
            FactColumn::sampled("Transacao_ID", SamplerRule::Uuid),
            FactColumn::sampled(
                "Data_Transacao",
                datetime(DateSpec::YearsAgo(1), DateSpec::Today),
            ),
            FactColumn::derived(
                "Valor_Transacao",
                DeriveRule::TieredAmount {
                    tier_source: "Tipo_Cartao".to_string(),
                    bands: vec![
                        TierBand {
                            tiers: vec![
                                "Black".to_string(),
                                "Infinite".to_string(),
                                "Corporate".to_string(),
                            ],
                            low: 100.0,
                            high: 5000.0,
                        },
                        TierBand {
                            tiers: vec![
                                "Gold".to_string(),
                                "Platinum".to_string(),
                                "Empresarial".to_string(),
                            ],
                            low: 50.0,
                            high: 1000.0,
                        },
                    ],
                    fallback: (10.0, 500.0),
                    scale: 2,
                },
            ),
            FactColumn::sampled(
                "Categoria_Compra",
                cat(&[
                    "Alimentação",
                    "Transporte",
                    "Entretenimento",
                    "Saúde",
                    "Educação",
                    "Vestuário",
                    "Serviços",
                    "Viagem",
                ]),
            ),
            FactColumn::derived(
                "Estabelecimento",
                DeriveRule::PairedCategory {
                    category: "Categoria_Compra".to_string(),
                    pairs: establishment_pairs(),
                },
            ),
            FactColumn::sampled("Cidade_Transacao", SamplerRule::City),
            FactColumn::sampled("Estado_Transacao", SamplerRule::StateCode),
            FactColumn::sampled(
                "Pais_Transacao",
                weighted(fixed_text("Brasil"), SamplerRule::Country, 0.9),
            ),
            FactColumn::sampled(
                "Moeda",
                weighted(fixed_text("BRL"), cat(&["USD", "EUR", "GBP"]), 0.9),
            ),
            FactColumn::sampled(
                "Metodo_Pagamento",
                cat(&[
                    "Crédito à Vista",
                    "Crédito Parcelado",
                    "Débito",
                    "Contactless",
                    "Mobile Payment",
                    "QR Code",
                ]),
            ),
            FactColumn::sampled("Numero_Parcelas", weighted(integer(1, 12), fixed_int(1), 0.3)),
            FactColumn::sampled(
                "Canal_Transacao",
                cat(&[
                    "Loja Física",
                    "E-commerce",
                    "Aplicativo",
                    "Telefone",
                    "Recorrente",
                    "Internacional",
                ]),
            ),
            FactColumn::sampled(
                "Status_Transacao",
                cat(&[
                    "Aprovada",
                    "Negada",
                    "Em análise",
                    "Cancelada",
                    "Estornada",
                    "Contestada",
                ]),
            ),
            FactColumn::derived(
                "Data_Vencimento",
                DeriveRule::OffsetDate {
                    base: "Data_Transacao".to_string(),
                    offset_days: vec![10, 15, 30],
                },
            ),
            FactColumn::derived(
                "Data_Pagamento",
                DeriveRule::JitterDate {
                    base: "Data_Vencimento".to_string(),
                    min_days: -5,
                    max_days: 15,
                    p_present: 0.95,
                },
            ),
            FactColumn::derived(
                "Valor_Juros",
                DeriveRule::LateFee {
                    amount: "Valor_Transacao".to_string(),
                    due: "Data_Vencimento".to_string(),
                    paid: "Data_Pagamento".to_string(),
                    monthly_rate: 0.15,
                },
            ),
            FactColumn::derived(
                "Valor_IOF",
                DeriveRule::RatedFee {
                    base: "Valor_Transacao".to_string(),
                    rate: 0.0638,
                    p_applied: 0.1,
                },
            ),
            FactColumn::derived(
                "Pontos_Acumulados",
                DeriveRule::LoyaltyPoints {
                    amount: "Valor_Transacao".to_string(),
                    program_source: "Programa_Fidelidade".to_string(),
                    opt_out: "Nenhum".to_string(),
                    min_rate: 0.5,
                    max_rate: 2.0,
                },
            ),
            FactColumn::sampled("Taxa_Cambio", optional(amount(4.5, 5.5), 0.1)),
        ],
    };

    DomainSchema { dimension, facts }
}
