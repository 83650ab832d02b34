//! Restaurant domain: employees and order transactions.

use super::*;
use martgen_core::{DimensionSchema, DomainSchema, FactColumn, FactSchema, SamplerRule};

pub(crate) fn schema() -> DomainSchema {
    let dimension = DimensionSchema {
        table: "funcionarios".to_string(),
        key_column: "CPF".to_string(),
        columns: vec![
            col("CPF", SamplerRule::Cpf),
            col("Nome", SamplerRule::FullName),
            col(
                "Data_Nascimento",
                date(DateSpec::YearsAgo(65), DateSpec::YearsAgo(18)),
            ),
            col("Endereço", SamplerRule::StreetAddress),
            col("Cidade", SamplerRule::City),
            col("Estado", SamplerRule::StateCode),
            col("CEP", SamplerRule::PostalCode),
            col("Email", SamplerRule::Email),
            col("Telefone", SamplerRule::Phone),
            col(
                "Cargo",
                cat(&["Atendente", "Cozinheiro", "Gerente", "Caixa", "Auxiliar", "Supervisor"]),
            ),
            col("Turno", cat(&["Manhã", "Tarde", "Noite", "Madrugada"])),
            col(
                "Data_Admissao",
                date(DateSpec::YearsAgo(5), DateSpec::Today),
            ),
            col("Salario", amount(1320.0, 5000.0)),
            col("Status", cat(&["Ativo", "Férias", "Afastado", "Treinamento"])),
            col(
                "Setor",
                cat(&["Cozinha", "Atendimento", "Caixa", "Limpeza", "Delivery"]),
            ),
        ],
    };

    let facts = FactSchema {
        table: "pedidos".to_string(),
        columns: vec![
            FactColumn::foreign_key("CPF"),
            FactColumn::sampled("Transacao_ID", SamplerRule::Uuid),
            FactColumn::sampled(
                "Data_Transacao",
                datetime(DateSpec::YearsAgo(1), DateSpec::Today),
            ),
            FactColumn::sampled("Valor_Total", amount(10.0, 300.0)),
            FactColumn::sampled("Quantidade_Itens", integer(1, 10)),
            FactColumn::sampled(
                "Item_Principal",
                cat(&[
                    "Hambúrguer Simples",
                    "Hambúrguer Duplo",
                    "Pizza Grande",
                    "Pizza Média",
                    "Combo Família",
                    "Combo Individual",
                    "Salada Premium",
                    "Sobremesa Especial",
                ]),
            ),
            FactColumn::sampled(
                "Acompanhamentos",
                cat(&[
                    "Batata Frita Grande",
                    "Batata Frita Média",
                    "Onion Rings",
                    "Salada Caesar",
                    "Sem Acompanhamento",
                ]),
            ),
            FactColumn::sampled(
                "Bebida",
                cat(&[
                    "Refrigerante 500ml",
                    "Refrigerante 700ml",
                    "Suco Natural",
                    "Água Mineral",
                    "Milk Shake Premium",
                    "Sem Bebida",
                ]),
            ),
            FactColumn::sampled(
                "Tipo_Pedido",
                cat(&[
                    "Delivery Express",
                    "Balcão Rápido",
                    "Drive-thru",
                    "Mesa VIP",
                    "Take Away Premium",
                ]),
            ),
            FactColumn::sampled("Tempo_Preparo_Min", integer(5, 45)),
            FactColumn::sampled("Desconto_Aplicado", amount(0.0, 30.0)),
            FactColumn::sampled(
                "Forma_Pagamento",
                cat(&[
                    "Dinheiro",
                    "Cartão Débito",
                    "Cartão Crédito",
                    "Pix",
                    "Vale Refeição",
                    "App Próprio",
                ]),
            ),
            FactColumn::sampled("Avaliacao_Cliente", integer(1, 5)),
            FactColumn::sampled(
                "Status_Pedido",
                cat(&[
                    "Concluído",
                    "Em Preparo",
                    "Cancelado",
                    "Em Entrega",
                    "Aguardando Retirada",
                ]),
            ),
            FactColumn::sampled(
                "Canal_Venda",
                cat(&[
                    "App Próprio Premium",
                    "iFood Plus",
                    "Uber Eats Select",
                    "Rappi Prime",
                    "Presencial VIP",
                ]),
            ),
            FactColumn::sampled("Custo_Operacional", amount(5.0, 100.0)),
            FactColumn::sampled("Margem_Lucro", amount(0.1, 0.6)),
            FactColumn::sampled("Tempo_Entrega_Min", integer(10, 90)),
            FactColumn::sampled("Satisfacao_Entrega", integer(1, 5)),
        ],
    };

    DomainSchema { dimension, facts }
}
