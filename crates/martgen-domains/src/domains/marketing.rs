//! Marketing domain: professionals and campaign runs.

use super::*;
use martgen_core::{DimensionSchema, DomainSchema, FactColumn, FactSchema, SamplerRule};

pub(crate) fn schema() -> DomainSchema {
    let dimension = DimensionSchema {
        table: "profissionais".to_string(),
        key_column: "CPF".to_string(),
        columns: vec![
            col("CPF", SamplerRule::Cpf),
            col("Nome", SamplerRule::FullName),
            col("Email", SamplerRule::Email),
            col("Telefone", SamplerRule::Phone),
            col(
                "Departamento",
                cat(&[
                    "Marketing Digital",
                    "Branding",
                    "Mídia Social",
                    "Conteúdo",
                    "SEO",
                    "Eventos",
                    "Relações Públicas",
                ]),
            ),
            col(
                "Cargo",
                cat(&[
                    "Analista Jr",
                    "Analista Pleno",
                    "Analista Sênior",
                    "Coordenador",
                    "Gerente",
                    "Diretor",
                    "CMO",
                ]),
            ),
            col(
                "Data_Admissao",
                date(DateSpec::YearsAgo(5), DateSpec::Today),
            ),
            col(
                "Especialidade",
                cat(&[
                    "Google Ads",
                    "Facebook Ads",
                    "Email Marketing",
                    "Inbound Marketing",
                    "Growth Hacking",
                    "Copywriting",
                    "Analytics",
                ]),
            ),
            col(
                "Nivel_Experiencia",
                cat(&["Iniciante", "Intermediário", "Avançado", "Especialista"]),
            ),
            col(
                "Certificacoes",
                cat(&[
                    "Google Analytics",
                    "HubSpot",
                    "Facebook Blueprint",
                    "Google Ads",
                    "Nenhuma",
                    "Múltiplas",
                ]),
            ),
        ],
    };

    let facts = FactSchema {
        table: "campanhas".to_string(),
        columns: vec![
            FactColumn::foreign_key("CPF"),
            FactColumn::sampled("Campanha_ID", SamplerRule::Uuid),
            FactColumn::sampled("Nome_Campanha", pattern("Campanha {word} {pick:Q1|Q2|Q3|Q4}")),
            FactColumn::sampled(
                "Data_Inicio",
                date(DateSpec::YearsAgo(1), DateSpec::Today),
            ),
            FactColumn::sampled(
                "Data_Fim",
                date(DateSpec::Today, DateSpec::MonthsAhead(6)),
            ),
            FactColumn::sampled(
                "Canal",
                cat(&[
                    "Email",
                    "Social Media",
                    "Google Ads",
                    "Facebook Ads",
                    "Instagram",
                    "LinkedIn",
                    "TikTok",
                    "YouTube",
                ]),
            ),
            FactColumn::sampled("Orcamento", amount(1000.0, 50000.0)),
            FactColumn::sampled("Gasto_Real", amount(800.0, 60000.0)),
            FactColumn::sampled("Impressoes", integer(1000, 1_000_000)),
            FactColumn::sampled("Cliques", integer(100, 50_000)),
            FactColumn::sampled("Conversoes", integer(1, 1000)),
            FactColumn::sampled("CTR", amount_scaled(0.01, 0.15, 4)),
            FactColumn::sampled("CPC", amount(0.5, 10.0)),
            FactColumn::sampled("CPA", amount(5.0, 200.0)),
            FactColumn::sampled("ROI", amount(-0.5, 10.0)),
            FactColumn::sampled(
                "Publico_Alvo",
                cat(&[
                    "Jovens 18-24",
                    "Adultos 25-34",
                    "Adultos 35-44",
                    "Sênior 45-65",
                    "Empresas B2B",
                    "Pais e Mães",
                    "Estudantes",
                ]),
            ),
            FactColumn::sampled(
                "Objetivo",
                cat(&[
                    "Awareness",
                    "Consideração",
                    "Conversão",
                    "Retenção",
                    "Fidelização",
                    "Engajamento",
                ]),
            ),
            FactColumn::sampled(
                "Status",
                cat(&["Ativa", "Pausada", "Concluída", "Planejada", "Cancelada"]),
            ),
        ],
    };

    DomainSchema { dimension, facts }
}
