//! E-commerce domain: customers and orders.

use super::*;
use martgen_core::{DimensionSchema, DomainSchema, FactColumn, FactSchema, SamplerRule};

pub(crate) fn schema() -> DomainSchema {
    let dimension = DimensionSchema {
        table: "clientes".to_string(),
        key_column: "CPF".to_string(),
        columns: vec![
            col("CPF", SamplerRule::Cpf),
            col("Nome", SamplerRule::FullName),
            col("Email", SamplerRule::Email),
            col("Telefone", SamplerRule::Phone),
            col(
                "Data_Nascimento",
                date(DateSpec::YearsAgo(80), DateSpec::YearsAgo(18)),
            ),
            col("Endereco_Entrega", SamplerRule::StreetAddress),
            col("Cidade", SamplerRule::City),
            col("Estado", SamplerRule::StateCode),
            col("CEP", SamplerRule::PostalCode),
            col(
                "Data_Cadastro",
                date(DateSpec::YearsAgo(5), DateSpec::Today),
            ),
            col(
                "Ultima_Compra",
                date(DateSpec::YearsAgo(1), DateSpec::Today),
            ),
            col("Total_Compras", integer(1, 50)),
            col("Valor_Total_Gasto", amount(100.0, 10000.0)),
            col(
                "Categoria_Preferida",
                cat(&[
                    "Eletrônicos",
                    "Moda",
                    "Casa e Decoração",
                    "Esportes",
                    "Beleza e Saúde",
                    "Livros",
                    "Alimentos",
                    "Brinquedos",
                ]),
            ),
            col("Dispositivo_Preferido", cat(&["Desktop", "Mobile", "Tablet", "App"])),
            col(
                "Programa_Fidelidade",
                cat(&["Bronze", "Prata", "Ouro", "Diamante", "Não Participante"]),
            ),
            col("Newsletter", boolean()),
            col("Cupom_Ativo", boolean()),
        ],
    };

    let facts = FactSchema {
        table: "pedidos".to_string(),
        columns: vec![
            FactColumn::foreign_key("CPF"),
            FactColumn::sampled("Pedido_ID", SamplerRule::Uuid),
            FactColumn::sampled(
                "Data_Pedido",
                datetime(DateSpec::YearsAgo(1), DateSpec::Today),
            ),
            FactColumn::sampled("Valor_Total", amount(20.0, 2000.0)),
            FactColumn::sampled("Quantidade_Itens", integer(1, 15)),
            FactColumn::sampled(
                "Categoria_Principal",
                cat(&[
                    "Eletrônicos",
                    "Moda",
                    "Casa e Decoração",
                    "Esportes",
                    "Beleza e Saúde",
                    "Livros",
                    "Alimentos",
                    "Brinquedos",
                ]),
            ),
            FactColumn::sampled(
                "Produto_Principal",
                pattern("{pick:Smartphone|Notebook|TV|Tênis|Camiseta|Livro|Perfume|Relógio} {word}"),
            ),
            FactColumn::sampled("Valor_Frete", amount(0.0, 50.0)),
            FactColumn::sampled(
                "Cupom_Desconto",
                weighted(amount(0.0, 100.0), fixed_amount(0.0), 0.3),
            ),
            FactColumn::sampled(
                "Metodo_Pagamento",
                cat(&[
                    "Cartão de Crédito",
                    "Boleto",
                    "Pix",
                    "PayPal",
                    "Cartão de Débito",
                    "Vale-Presente",
                    "Transferência Bancária",
                ]),
            ),
            FactColumn::sampled("Parcelas", weighted(integer(1, 12), fixed_int(1), 0.6)),
            FactColumn::sampled(
                "Status_Pedido",
                cat(&[
                    "Aguardando Pagamento",
                    "Pagamento Aprovado",
                    "Em Separação",
                    "Em Transporte",
                    "Entregue",
                    "Cancelado",
                    "Devolvido",
                ]),
            ),
            FactColumn::sampled(
                "Data_Entrega",
                optional(date(DateSpec::Today, DateSpec::DaysAhead(30)), 0.8),
            ),
            FactColumn::sampled("Tempo_Entrega_Dias", integer(1, 30)),
            FactColumn::sampled("Avaliacao_Produto", optional(integer(1, 5), 0.7)),
            FactColumn::sampled("Comentario", optional(SamplerRule::FreeText, 0.3)),
            FactColumn::sampled(
                "Dispositivo_Compra",
                cat(&["Desktop", "Mobile Android", "Mobile iOS", "Tablet", "App"]),
            ),
            FactColumn::sampled(
                "Canal_Aquisicao",
                cat(&[
                    "Busca Orgânica",
                    "Google Ads",
                    "Facebook Ads",
                    "Email Marketing",
                    "Indicação",
                    "Instagram",
                    "Comparador de Preços",
                    "Link Direto",
                ]),
            ),
            FactColumn::sampled("Devolucao", boolean()),
            FactColumn::sampled(
                "Motivo_Devolucao",
                cat_or_null(&[
                    "Produto Danificado",
                    "Tamanho Incorreto",
                    "Cor Diferente",
                    "Arrependimento",
                    "Produto Errado",
                ]),
            ),
        ],
    };

    DomainSchema { dimension, facts }
}
