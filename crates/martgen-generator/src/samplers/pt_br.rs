//! Static pt_BR vocabulary backing the locale-aware samplers.
//!
//! Word lists are intentionally modest; realism comes from combination, not
//! from list size.

pub const FIRST_NAMES: &[&str] = &[
    "Ana", "Beatriz", "Bruno", "Camila", "Carlos", "Daniela", "Eduardo", "Fernanda", "Gabriel",
    "Gustavo", "Helena", "Isabela", "João", "José", "Juliana", "Larissa", "Leonardo", "Letícia",
    "Lucas", "Luiz", "Marcos", "Maria", "Mariana", "Mateus", "Patrícia", "Paulo", "Pedro",
    "Rafael", "Renata", "Ricardo", "Roberta", "Rodrigo", "Sofia", "Thiago", "Vanessa", "Vinícius",
];

pub const SURNAMES: &[&str] = &[
    "Almeida", "Alves", "Araujo", "Barbosa", "Barros", "Cardoso", "Carvalho", "Castro", "Costa",
    "Dias", "Fernandes", "Ferreira", "Gomes", "Lima", "Lopes", "Martins", "Melo", "Mendes",
    "Monteiro", "Moreira", "Nascimento", "Nunes", "Oliveira", "Pereira", "Pinto", "Ramos",
    "Ribeiro", "Rocha", "Rodrigues", "Santos", "Silva", "Souza", "Teixeira", "Vieira",
];

pub const CITIES: &[&str] = &[
    "São Paulo", "Rio de Janeiro", "Belo Horizonte", "Salvador", "Fortaleza", "Curitiba",
    "Recife", "Porto Alegre", "Manaus", "Belém", "Goiânia", "Campinas", "São Luís", "Maceió",
    "Natal", "Teresina", "João Pessoa", "Florianópolis", "Aracaju", "Cuiabá", "Campo Grande",
    "Vitória", "Londrina", "Sorocaba", "Uberlândia", "Niterói", "Santos", "Joinville",
];

/// The 27 federative unit codes.
pub const STATE_CODES: &[&str] = &[
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB",
    "PR", "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

pub const NEIGHBORHOODS: &[&str] = &[
    "Centro", "Jardim Paulista", "Vila Nova", "Boa Vista", "Santa Cecília", "Bela Vista",
    "Copacabana", "Tijuca", "Savassi", "Pituba", "Aldeota", "Batel", "Boa Viagem", "Moinhos",
    "Ponta Verde", "Lagoa Nova", "Trindade", "Asa Sul", "Meireles", "Pinheiros",
];

pub const STREET_TYPES: &[&str] = &["Rua", "Avenida", "Travessa", "Alameda", "Praça"];

pub const EMAIL_PROVIDERS: &[&str] = &[
    "gmail.com", "hotmail.com", "outlook.com", "yahoo.com.br", "uol.com.br", "bol.com.br",
    "terra.com.br",
];

/// Common mobile area codes.
pub const AREA_CODES: &[&str] = &[
    "11", "21", "31", "41", "51", "61", "71", "81", "85", "91", "19", "27", "47", "48", "62",
];

pub const COMPANY_SECTORS: &[&str] = &[
    "Comércio", "Indústria", "Serviços", "Tecnologia", "Alimentos", "Logística", "Distribuidora",
];

pub const COUNTRIES: &[&str] = &[
    "Argentina", "Chile", "Uruguai", "Paraguai", "Estados Unidos", "Portugal", "Espanha",
    "França", "Alemanha", "Itália", "Japão", "México", "Canadá", "Reino Unido", "Colômbia",
];

/// Lorem-style filler words for free text, campaign names, and product tags.
pub const WORDS: &[&str] = &[
    "mercado", "cliente", "valor", "processo", "resultado", "projeto", "sistema", "produto",
    "serviço", "equipe", "relatório", "análise", "contrato", "prazo", "meta", "campanha",
    "estoque", "pedido", "entrega", "fatura", "saldo", "limite", "proposta", "visita",
    "cadastro", "canal", "região", "unidade", "turno", "plano",
];
