//! Call-center domain: agents and handled calls.

use super::*;
use martgen_core::{DeriveRule, DimensionSchema, DomainSchema, FactColumn, FactSchema, SamplerRule};

pub(crate) fn schema() -> DomainSchema {
    let dimension = DimensionSchema {
        table: "atendentes".to_string(),
        key_column: "CPF".to_string(),
        columns: vec![
            col("CPF", SamplerRule::Cpf),
            col("Nome", SamplerRule::FullName),
            col("Email", SamplerRule::Email),
            col("Telefone", SamplerRule::Phone),
            col(
                "Data_Nascimento",
                date(DateSpec::YearsAgo(60), DateSpec::YearsAgo(18)),
            ),
            col(
                "Data_Contratacao",
                date(DateSpec::YearsAgo(5), DateSpec::Today),
            ),
            col("Nivel", cat(&["Júnior", "Pleno", "Sênior", "Especialista", "Supervisor"])),
            col(
                "Equipe",
                cat(&[
                    "Suporte Técnico",
                    "Vendas",
                    "SAC",
                    "Retenção",
                    "Cobrança",
                    "Ouvidoria",
                    "Backoffice",
                ]),
            ),
            col("Turno", cat(&["Manhã", "Tarde", "Noite", "Madrugada", "Integral"])),
            col(
                "Idiomas",
                cat(&[
                    "Português",
                    "Português/Inglês",
                    "Português/Espanhol",
                    "Português/Inglês/Espanhol",
                    "Português/Francês",
                ]),
            ),
            col(
                "Habilidades",
                cat(&[
                    "Técnico",
                    "Vendas",
                    "Negociação",
                    "Resolução de Problemas",
                    "Atendimento Premium",
                    "Multiskill",
                    "Especialista",
                ]),
            ),
            col("Status", cat(&["Ativo", "Férias", "Afastado", "Treinamento", "Desligado"])),
            col("Salario", amount(1500.0, 5000.0)),
            col("Meta_Mensal", integer(100, 500)),
        ],
    };

    let facts = FactSchema {
        table: "chamadas".to_string(),
        columns: vec![
            FactColumn::foreign_key("CPF_Atendente"),
            FactColumn::sampled("Chamada_ID", SamplerRule::Uuid),
            FactColumn::sampled(
                "Data_Hora_Inicio",
                datetime(DateSpec::YearsAgo(1), DateSpec::Today),
            ),
            FactColumn::sampled("Duracao_Segundos", integer(30, 3600)),
            FactColumn::sampled("Tipo_Chamada", cat(&["Receptiva", "Ativa", "Transferida", "Retorno"])),
            FactColumn::sampled(
                "Assunto",
                cat(&[
                    "Dúvida Técnica",
                    "Reclamação",
                    "Cancelamento",
                    "Compra",
                    "Informação",
                    "Suporte",
                    "Cobrança",
                    "Elogio",
                ]),
            ),
            FactColumn::derived(
                "Equipe",
                DeriveRule::CopyFromDimension {
                    source: "Equipe".to_string(),
                },
            ),
            FactColumn::sampled("Prioridade", cat(&["Baixa", "Média", "Alta", "Crítica"])),
            FactColumn::sampled("Tempo_Espera_Segundos", integer(0, 900)),
            FactColumn::sampled("Transferencias", integer(0, 5)),
            FactColumn::sampled("Resolucao_Primeiro_Contato", boolean()),
            FactColumn::sampled("Satisfacao_Cliente", optional(integer(1, 5), 0.7)),
            FactColumn::sampled("Protocolo", pattern("{rand:10}")),
            FactColumn::sampled(
                "Canal",
                cat(&["Telefone", "Chat", "Email", "WhatsApp", "Redes Sociais", "App"]),
            ),
            FactColumn::sampled(
                "Status_Final",
                cat(&["Resolvido", "Pendente", "Escalado", "Abandonado", "Transferido"]),
            ),
            FactColumn::sampled("Feedback", optional(SamplerRule::FreeText, 0.3)),
            FactColumn::sampled("Custo_Chamada", amount(1.0, 50.0)),
            FactColumn::sampled("Venda_Realizada", boolean()),
            FactColumn::sampled(
                "Valor_Venda",
                weighted(amount(50.0, 1000.0), fixed_amount(0.0), 0.3),
            ),
        ],
    };

    DomainSchema { dimension, facts }
}
