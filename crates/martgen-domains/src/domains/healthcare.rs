//! Healthcare domain: physicians and attendances.

use super::*;
use martgen_core::{DimensionSchema, DomainSchema, FactColumn, FactSchema, SamplerRule};

pub(crate) fn schema() -> DomainSchema {
    let dimension = DimensionSchema {
        table: "medicos".to_string(),
        key_column: "CPF".to_string(),
        columns: vec![
            col("CPF", SamplerRule::Cpf),
            col("Nome", SamplerRule::FullName),
            col("CRM", pattern("{rand:5}-{state}")),
            col(
                "Especialidade",
                cat(&[
                    "Clínica Geral",
                    "Cardiologia",
                    "Pediatria",
                    "Ortopedia",
                    "Ginecologia",
                    "Neurologia",
                    "Dermatologia",
                    "Psiquiatria",
                    "Oftalmologia",
                    "Endocrinologia",
                    "Oncologia",
                    "Urologia",
                ]),
            ),
            col(
                "Departamento",
                cat(&[
                    "Emergência",
                    "Ambulatório",
                    "Centro Cirúrgico",
                    "UTI",
                    "Enfermaria",
                    "Maternidade",
                    "Pediatria",
                    "Oncologia",
                ]),
            ),
            col(
                "Hospital",
                pattern("Hospital {surname} {pick:Central|Regional|Especializado|Universitário}"),
            ),
            col(
                "Data_Contratacao",
                date(DateSpec::YearsAgo(15), DateSpec::Today),
            ),
            col("Carga_Horaria", cat_ints(&[20, 30, 40, 60])),
            col("Salario", amount(5000.0, 30000.0)),
            col("Plantoes_Mensais", integer(0, 10)),
            col(
                "Nivel",
                cat(&["Residente", "Especialista", "Sênior", "Chefe de Equipe", "Diretor Clínico"]),
            ),
            col(
                "Titulacao",
                cat(&["Graduação", "Especialização", "Mestrado", "Doutorado", "Pós-Doutorado"]),
            ),
            col("Status", cat(&["Ativo", "Férias", "Licença", "Afastado", "Treinamento"])),
        ],
    };

    let facts = FactSchema {
        table: "atendimentos".to_string(),
        columns: vec![
            FactColumn::foreign_key("CPF_Medico"),
            FactColumn::sampled("Atendimento_ID", SamplerRule::Uuid),
            FactColumn::sampled("CPF_Paciente", SamplerRule::Cpf),
            FactColumn::sampled(
                "Data_Atendimento",
                datetime(DateSpec::YearsAgo(1), DateSpec::Today),
            ),
            FactColumn::sampled(
                "Tipo_Atendimento",
                cat(&[
                    "Consulta",
                    "Emergência",
                    "Cirurgia",
                    "Exame",
                    "Retorno",
                    "Telemedicina",
                    "Procedimento",
                ]),
            ),
            FactColumn::sampled(
                "Diagnostico_Principal",
                cat(&[
                    "Hipertensão",
                    "Diabetes",
                    "Infecção Respiratória",
                    "Trauma",
                    "Cardiopatia",
                    "Transtorno Psiquiátrico",
                    "Câncer",
                    "Gestação",
                    "Doença Autoimune",
                    "Obesidade",
                    "Fratura",
                    "Check-up",
                ]),
            ),
            FactColumn::sampled("Gravidade", cat(&["Baixa", "Média", "Alta", "Crítica"])),
            FactColumn::sampled("Tempo_Atendimento_Min", integer(10, 180)),
            FactColumn::sampled("Medicamentos_Prescritos", integer(0, 8)),
            FactColumn::sampled("Exames_Solicitados", integer(0, 5)),
            FactColumn::sampled("Valor_Procedimento", amount(50.0, 10000.0)),
            FactColumn::sampled(
                "Convenio",
                cat(&[
                    "SUS",
                    "Unimed",
                    "Bradesco Saúde",
                    "Amil",
                    "SulAmérica",
                    "Particular",
                    "Golden Cross",
                    "Notredame Intermédica",
                ]),
            ),
            FactColumn::sampled("Retorno_Agendado", boolean()),
            FactColumn::sampled("Internacao", boolean()),
            FactColumn::sampled("Dias_Internacao", weighted(integer(1, 30), fixed_int(0), 0.3)),
            FactColumn::sampled("Satisfacao_Paciente", integer(1, 5)),
            FactColumn::sampled("Complicacoes", boolean()),
        ],
    };

    DomainSchema { dimension, facts }
}
