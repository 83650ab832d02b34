//! Real-estate domain: brokers and property transactions.

use super::*;
use martgen_core::{DimensionSchema, DomainSchema, FactColumn, FactSchema, SamplerRule};

pub(crate) fn schema() -> DomainSchema {
    let dimension = DimensionSchema {
        table: "corretores".to_string(),
        key_column: "CPF".to_string(),
        columns: vec![
            col("CPF", SamplerRule::Cpf),
            col("Nome", SamplerRule::FullName),
            col("Email", SamplerRule::Email),
            col("Telefone", SamplerRule::Phone),
            col("CRECI", pattern("{rand:5}-{state}")),
            col(
                "Data_Admissao",
                date(DateSpec::YearsAgo(10), DateSpec::Today),
            ),
            col(
                "Regiao_Atuacao",
                cat(&[
                    "Zona Sul",
                    "Zona Norte",
                    "Zona Leste",
                    "Zona Oeste",
                    "Centro",
                    "Região Metropolitana",
                    "Litoral",
                    "Interior",
                ]),
            ),
            col(
                "Especialidade",
                cat(&[
                    "Residencial",
                    "Comercial",
                    "Industrial",
                    "Rural",
                    "Lançamentos",
                    "Alto Padrão",
                    "Econômico",
                    "Investimentos",
                ]),
            ),
            col("Nivel", cat(&["Júnior", "Pleno", "Sênior", "Master", "Diretor"])),
            col(
                "Certificacoes",
                cat(&["Nenhuma", "Avaliador", "Consultor", "Perito", "Múltiplas"]),
            ),
            col(
                "Modelo_Trabalho",
                cat(&["CLT", "Autônomo", "PJ", "Associado", "Franqueado"]),
            ),
            col("Comissao_Percentual", amount(1.5, 6.0)),
            col("Meta_Mensal", amount(50000.0, 500000.0)),
            col("Status", cat(&["Ativo", "Férias", "Afastado", "Treinamento", "Desligado"])),
        ],
    };

    let facts = FactSchema {
        table: "transacoes".to_string(),
        columns: vec![
            FactColumn::foreign_key("CPF_Corretor"),
            FactColumn::sampled("Transacao_ID", SamplerRule::Uuid),
            FactColumn::sampled(
                "Data_Transacao",
                datetime(DateSpec::YearsAgo(1), DateSpec::Today),
            ),
            FactColumn::sampled(
                "Tipo_Imovel",
                cat(&[
                    "Apartamento",
                    "Casa",
                    "Sobrado",
                    "Terreno",
                    "Sala Comercial",
                    "Galpão",
                    "Loja",
                    "Cobertura",
                    "Flat",
                    "Sítio",
                    "Fazenda",
                ]),
            ),
            FactColumn::sampled("Endereco", SamplerRule::StreetAddress),
            FactColumn::sampled("Bairro", SamplerRule::Neighborhood),
            FactColumn::sampled("Cidade", SamplerRule::City),
            FactColumn::sampled("Estado", SamplerRule::StateCode),
            FactColumn::sampled("CEP", SamplerRule::PostalCode),
            FactColumn::sampled("Area_M2", integer(30, 1000)),
            FactColumn::sampled("Quartos", integer(0, 6)),
            FactColumn::sampled("Banheiros", integer(1, 6)),
            FactColumn::sampled("Vagas_Garagem", integer(0, 6)),
            FactColumn::sampled("Valor_Anunciado", amount(100_000.0, 5_000_000.0)),
            FactColumn::sampled("Valor_Transacao", amount(90_000.0, 4_800_000.0)),
            FactColumn::sampled(
                "Tipo_Transacao",
                cat(&["Venda", "Aluguel", "Temporada", "Permuta", "Arrendamento"]),
            ),
            FactColumn::sampled("Tempo_Anuncio_Dias", integer(1, 365)),
            FactColumn::sampled("Visitas_Realizadas", integer(0, 50)),
            FactColumn::sampled("Propostas_Recebidas", integer(0, 10)),
            FactColumn::sampled("Comissao_Valor", amount(3000.0, 150_000.0)),
            FactColumn::sampled("Financiamento", boolean()),
            FactColumn::sampled(
                "Banco_Financiador",
                cat_or_null(&[
                    "Caixa",
                    "Banco do Brasil",
                    "Itaú",
                    "Bradesco",
                    "Santander",
                    "Não Aplicável",
                ]),
            ),
            FactColumn::sampled(
                "Captacao_Origem",
                cat(&[
                    "Site Próprio",
                    "Portal Imobiliário",
                    "Indicação",
                    "Anúncio",
                    "Redes Sociais",
                    "Prospecção Ativa",
                    "Vitrine",
                ]),
            ),
            FactColumn::sampled(
                "Status_Final",
                cat(&["Concluída", "Cancelada", "Desistência", "Pendência Documental"]),
            ),
        ],
    };

    DomainSchema { dimension, facts }
}
