//! Education domain: teachers and classes taught.

use super::*;
use martgen_core::{DeriveRule, DimensionSchema, DomainSchema, FactColumn, FactSchema, SamplerRule};

pub(crate) fn schema() -> DomainSchema {
    let dimension = DimensionSchema {
        table: "professores".to_string(),
        key_column: "CPF".to_string(),
        columns: vec![
            col("CPF", SamplerRule::Cpf),
            col("Nome", SamplerRule::FullName),
            col("Email", SamplerRule::Email),
            col("Telefone", SamplerRule::Phone),
            col(
                "Data_Nascimento",
                date(DateSpec::YearsAgo(70), DateSpec::YearsAgo(25)),
            ),
            col(
                "Formacao",
                cat(&[
                    "Licenciatura",
                    "Bacharelado",
                    "Especialização",
                    "Mestrado",
                    "Doutorado",
                    "Pós-Doutorado",
                ]),
            ),
            col(
                "Area_Conhecimento",
                cat(&[
                    "Exatas",
                    "Humanas",
                    "Biológicas",
                    "Linguagens",
                    "Tecnologia",
                    "Artes",
                    "Saúde",
                    "Negócios",
                ]),
            ),
            col(
                "Disciplina",
                cat(&[
                    "Matemática",
                    "Português",
                    "História",
                    "Geografia",
                    "Física",
                    "Química",
                    "Biologia",
                    "Inglês",
                    "Educação Física",
                    "Artes",
                    "Filosofia",
                    "Sociologia",
                ]),
            ),
            col(
                "Instituicao",
                pattern("Escola {surname} {pick:Municipal|Estadual|Federal|Particular}"),
            ),
            col(
                "Cargo",
                cat(&[
                    "Professor",
                    "Coordenador",
                    "Diretor",
                    "Orientador",
                    "Pedagogo",
                    "Tutor",
                    "Monitor",
                    "Pesquisador",
                ]),
            ),
            col("Tempo_Experiencia_Anos", integer(1, 40)),
            col("Carga_Horaria_Semanal", cat_ints(&[20, 30, 40, 60])),
            col("Salario", amount(2000.0, 15000.0)),
            col("Status", cat(&["Ativo", "Férias", "Licença", "Afastado", "Aposentado"])),
            col(
                "Nivel_Ensino",
                cat(&[
                    "Infantil",
                    "Fundamental I",
                    "Fundamental II",
                    "Médio",
                    "Superior",
                    "Pós-Graduação",
                    "EJA",
                ]),
            ),
        ],
    };

    let facts = FactSchema {
        table: "aulas".to_string(),
        columns: vec![
            FactColumn::foreign_key("CPF_Professor"),
            FactColumn::sampled("Aula_ID", SamplerRule::Uuid),
            FactColumn::sampled(
                "Data_Aula",
                datetime(DateSpec::YearsAgo(1), DateSpec::Today),
            ),
            FactColumn::derived(
                "Disciplina",
                DeriveRule::CopyFromDimension {
                    source: "Disciplina".to_string(),
                },
            ),
            FactColumn::sampled(
                "Turma",
                pattern("{pick:1º|2º|3º|4º|5º|6º|7º|8º|9º} {pick:A|B|C|D|E}"),
            ),
            FactColumn::sampled("Quantidade_Alunos", integer(15, 50)),
            FactColumn::sampled("Presenca_Percentual", amount(0.5, 1.0)),
            FactColumn::sampled("Duracao_Minutos", cat_ints(&[50, 100, 150])),
            FactColumn::sampled(
                "Conteudo",
                pattern("Módulo {pick:1|2|3|4|5|6|7|8|9|10}: {sentence}"),
            ),
            FactColumn::sampled(
                "Metodologia",
                cat(&[
                    "Expositiva",
                    "Prática",
                    "Projeto",
                    "Debate",
                    "Seminário",
                    "Laboratório",
                    "Híbrida",
                    "EAD",
                ]),
            ),
            FactColumn::sampled(
                "Recursos_Utilizados",
                cat(&[
                    "Lousa",
                    "Projetor",
                    "Computadores",
                    "Livros",
                    "Apostilas",
                    "Experimentos",
                    "Plataforma Digital",
                ]),
            ),
            FactColumn::sampled("Avaliacao_Aplicada", boolean()),
            FactColumn::sampled(
                "Media_Notas",
                optional(amount_scaled(0.0, 10.0, 1), 0.7),
            ),
            FactColumn::sampled(
                "Participacao_Alunos",
                cat(&["Baixa", "Média", "Alta", "Excelente"]),
            ),
            FactColumn::sampled(
                "Dificuldades_Encontradas",
                cat(&[
                    "Nenhuma",
                    "Comportamento",
                    "Aprendizado",
                    "Infraestrutura",
                    "Material Didático",
                    "Tempo Insuficiente",
                    "Heterogeneidade",
                ]),
            ),
            FactColumn::sampled("Atividade_Extraclasse", boolean()),
            FactColumn::sampled("Observacoes", optional(SamplerRule::FreeText, 0.3)),
        ],
    };

    DomainSchema { dimension, facts }
}
