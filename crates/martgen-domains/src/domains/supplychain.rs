//! Supply-chain domain: logistics staff and warehouse operations.

use super::*;
use martgen_core::{DimensionSchema, DomainSchema, FactColumn, FactSchema, SamplerRule};

pub(crate) fn schema() -> DomainSchema {
    let dimension = DimensionSchema {
        table: "responsaveis".to_string(),
        key_column: "CPF".to_string(),
        columns: vec![
            col("CPF", SamplerRule::Cpf),
            col("Nome", SamplerRule::FullName),
            col("Email", SamplerRule::Email),
            col("Telefone", SamplerRule::Phone),
            col(
                "Departamento",
                cat(&[
                    "Compras",
                    "Logística",
                    "Armazenagem",
                    "Distribuição",
                    "Planejamento",
                    "Importação",
                    "Qualidade",
                    "Produção",
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
                    "Operador",
                ]),
            ),
            col(
                "Data_Admissao",
                date(DateSpec::YearsAgo(8), DateSpec::Today),
            ),
            col(
                "Centro_Distribuicao",
                pattern("CD {pick:Norte|Sul|Leste|Oeste|Central}"),
            ),
            col(
                "Nivel_Acesso",
                cat(&["Básico", "Intermediário", "Avançado", "Administrativo", "Total"]),
            ),
            col(
                "Certificacoes",
                cat(&["Nenhuma", "CPIM", "CSCP", "CLTD", "Six Sigma", "ISO", "Múltiplas"]),
            ),
            col("Status", cat(&["Ativo", "Férias", "Afastado", "Treinamento", "Desligado"])),
            col("Salario", amount(2000.0, 20000.0)),
        ],
    };

    let facts = FactSchema {
        table: "operacoes".to_string(),
        columns: vec![
            FactColumn::foreign_key("CPF_Responsavel"),
            FactColumn::sampled("Operacao_ID", SamplerRule::Uuid),
            FactColumn::sampled(
                "Data_Operacao",
                datetime(DateSpec::YearsAgo(1), DateSpec::Today),
            ),
            FactColumn::sampled(
                "Tipo_Operacao",
                cat(&[
                    "Recebimento",
                    "Expedição",
                    "Transferência",
                    "Inventário",
                    "Devolução",
                    "Descarte",
                    "Produção",
                    "Importação",
                ]),
            ),
            FactColumn::sampled(
                "Produto_Categoria",
                cat(&[
                    "Eletrônicos",
                    "Alimentos",
                    "Vestuário",
                    "Farmacêuticos",
                    "Automotivos",
                    "Construção",
                    "Higiene",
                    "Bebidas",
                ]),
            ),
            FactColumn::sampled("Produto_ID", pattern("SKU-{rand:6}")),
            FactColumn::sampled("Quantidade", integer(1, 10000)),
            FactColumn::sampled(
                "Unidade_Medida",
                cat(&["Unidade", "Caixa", "Pallet", "Kg", "Litro", "Metro", "Lote"]),
            ),
            FactColumn::sampled("Valor_Unitario", amount(0.5, 5000.0)),
            FactColumn::sampled("Valor_Total", amount(100.0, 500_000.0)),
            FactColumn::sampled(
                "Fornecedor",
                pattern("{company} {pick:Ltda|S.A.|ME|EPP|EIRELI}"),
            ),
            FactColumn::sampled(
                "Origem",
                cat(&[
                    "Nacional",
                    "Importado China",
                    "Importado EUA",
                    "Importado Europa",
                    "Importado Mercosul",
                    "Produção Própria",
                ]),
            ),
            FactColumn::sampled(
                "Destino",
                cat(&[
                    "CD Norte",
                    "CD Sul",
                    "CD Leste",
                    "CD Oeste",
                    "CD Central",
                    "Loja",
                    "Cliente Final",
                    "Exportação",
                ]),
            ),
            FactColumn::sampled(
                "Meio_Transporte",
                cat(&[
                    "Rodoviário",
                    "Marítimo",
                    "Aéreo",
                    "Ferroviário",
                    "Multimodal",
                    "Próprio",
                    "Terceirizado",
                ]),
            ),
            FactColumn::sampled("Custo_Frete", amount(10.0, 10000.0)),
            FactColumn::sampled("Prazo_Entrega_Dias", integer(1, 90)),
            FactColumn::sampled("Lead_Time_Dias", integer(1, 120)),
            FactColumn::sampled(
                "Status_Operacao",
                cat(&[
                    "Concluída",
                    "Em Andamento",
                    "Atrasada",
                    "Cancelada",
                    "Pendente Documentação",
                    "Aguardando Aprovação",
                ]),
            ),
            FactColumn::sampled(
                "Problemas_Encontrados",
                cat_or_null(&[
                    "Nenhum",
                    "Avaria",
                    "Falta",
                    "Atraso",
                    "Qualidade",
                    "Documentação",
                    "Transporte",
                ]),
            ),
            FactColumn::sampled("Nivel_Servico", amount(0.7, 1.0)),
        ],
    };

    DomainSchema { dimension, facts }
}
