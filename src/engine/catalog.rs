// ==========================================
// SES-MT 360 - 市镇目录
// ==========================================
// 职责: 卫生区 → 市镇固定映射, 市镇 → 人口查找表
// 来源: IBGE 2022 普查/估算（主要中心城市）
// ==========================================

use crate::domain::types::Region;

/// 卫生区 → 市镇列表
///
/// 顺序决定市镇 ID 编码 (区序号 * 100 + 区内序号 + 1)
pub const MUNICIPALITIES_BY_REGION: &[(Region, &[&str])] = &[
    (
        Region::BaixadaCuiabana,
        &[
            "Acorizal",
            "Barão de Melgaço",
            "Chapada dos Guimarães",
            "Cuiabá",
            "Jangada",
            "Nobres",
            "Nossa Senhora do Livramento",
            "Poconé",
            "Rosário Oeste",
            "Santo Antônio do Leverger",
            "Várzea Grande",
        ],
    ),
    (
        Region::SulMatoGrossense,
        &[
            "Alto Araguaia",
            "Alto Garças",
            "Alto Taquari",
            "Araguainha",
            "Dom Aquino",
            "Guiratinga",
            "Itiquira",
            "Jaciara",
            "Juscimeira",
            "Pedra Preta",
            "Rondonópolis",
            "São José do Povo",
            "São Pedro da Cipa",
            "Tesouro",
        ],
    ),
    (
        Region::TelesPires,
        &[
            "Boa Esperança do Norte",
            "Cláudia",
            "Feliz Natal",
            "Ipiranga do Norte",
            "Itanhangá",
            "Lucas do Rio Verde",
            "Nova Maringá",
            "Nova Mutum",
            "Nova Ubiratã",
            "Santa Carmem",
            "Santa Rita do Trivelato",
            "Sinop",
            "Sorriso",
            "Tapurah",
            "União do Sul",
            "Vera",
        ],
    ),
    (
        Region::MedioNorte,
        &[
            "Alto Paraguai",
            "Arenápolis",
            "Barra do Bugres",
            "Campo Novo do Parecis",
            "Campos de Júlio",
            "Denise",
            "Diamantino",
            "Nortelândia",
            "Nova Marilândia",
            "Nova Olímpia",
            "Santo Afonso",
            "São José do Rio Claro",
            "Tangará da Serra",
            "Porto Estrela",
        ],
    ),
    (
        Region::OesteMatoGrossense,
        &[
            "Cáceres",
            "Curvelândia",
            "Glória D'Oeste",
            "Lambari D'Oeste",
            "Mirassol d'Oeste",
            "Porto Esperidião",
            "Reserva do Cabaçal",
            "Rio Branco",
            "Salto do Céu",
        ],
    ),
    (
        Region::SudoesteMatoGrossense,
        &[
            "Araputanga",
            "Figueirópolis D'Oeste",
            "Indiavaí",
            "Jauru",
            "São José dos Quatro Marcos",
            "Sapezal",
            "Vila Bela da Santíssima Trindade",
        ],
    ),
    (
        Region::AraguaiaXingu,
        &[
            "Bom Jesus do Araguaia",
            "Canabrava do Norte",
            "Confresa",
            "Luciara",
            "Novo Santo Antônio",
            "Porto Alegre do Norte",
            "Santa Cruz do Xingu",
            "Santa Terezinha",
            "São Félix do Araguaia",
            "São José do Xingu",
            "Vila Rica",
        ],
    ),
    (
        Region::ValeDoPeixoto,
        &[
            "Colíder",
            "Guarantã do Norte",
            "Itaúba",
            "Marcelândia",
            "Matupá",
            "Nova Canaã do Norte",
            "Nova Guarita",
            "Nova Santa Helena",
            "Novo Mundo",
            "Peixoto de Azevedo",
            "Terra Nova do Norte",
        ],
    ),
    (
        Region::GarcasAraguaia,
        &[
            "Araguaiana",
            "Barra do Garças",
            "General Carneiro",
            "Pontal do Araguaia",
            "Ponte Branca",
            "Poxoréu",
            "Ribeirãozinho",
            "Torixoréu",
        ],
    ),
    (
        Region::ValeDoGuapore,
        &[
            "Comodoro",
            "Conquista D'Oeste",
            "Nova Lacerda",
            "Pontes e Lacerda",
            "Vale de São Domingos",
        ],
    ),
    (
        Region::ValeDoArinos,
        &["Juara", "Novo Horizonte do Norte", "Porto dos Gaúchos", "Tabaporã"],
    ),
    (
        Region::MedioAraguaia,
        &[
            "Água Boa",
            "Campinápolis",
            "Canarana",
            "Cocalinho",
            "Gaúcha do Norte",
            "Nova Nazaré",
            "Nova Xavantina",
            "Novo São Joaquim",
            "Querência",
            "Ribeirão Cascalheira",
        ],
    ),
    (
        Region::NorteAraguaia,
        &["Alto Boa Vista", "Novo Santo Antônio Araguaia", "Serra Nova Dourada"],
    ),
    (
        Region::NoroesteMatoGrossense,
        &[
            "Aripuanã",
            "Brasnorte",
            "Castanheira",
            "Colniza",
            "Cotriguaçu",
            "Juína",
            "Juruena",
        ],
    ),
    (
        Region::AltoTapajos,
        &[
            "Alta Floresta",
            "Apiacás",
            "Carlinda",
            "Nova Bandeirantes",
            "Nova Monte Verde",
            "Paranaíta",
        ],
    ),
    (
        Region::CentroSul,
        &[
            "Campo Verde",
            "Nova Brasilândia",
            "Paranatinga",
            "Planalto da Serra",
            "Primavera do Leste",
            "Santo Antônio do Leste",
        ],
    ),
];

/// 已知人口（主要中心城市及特例）
pub const KNOWN_POPULATIONS: &[(&str, u32)] = &[
    ("Cuiabá", 650_912),
    ("Várzea Grande", 299_472),
    ("Rondonópolis", 244_897),
    ("Sinop", 196_067),
    ("Sorriso", 110_635),
    ("Tangará da Serra", 106_434),
    ("Cáceres", 89_478),
    ("Primavera do Leste", 85_146),
    ("Lucas do Rio Verde", 83_798),
    ("Barra do Garças", 69_214),
    ("Nova Mutum", 55_648),
    ("Pontes e Lacerda", 52_050),
    ("Alta Floresta", 51_782),
    ("Campo Novo do Parecis", 45_893),
    ("Campo Verde", 44_585),
    ("Juína", 41_101),
    ("Guarantã do Norte", 37_532),
    ("Confresa", 35_075),
    ("Juara", 34_906),
    ("Peixoto de Azevedo", 32_714),
    ("Poconé", 31_234),
    ("Colíder", 31_370),
    ("Sapezal", 28_944),
    ("Querência", 26_769),
    ("Vila Rica", 26_115),
    ("Canarana", 25_859),
    ("Água Boa", 25_548),
    ("Diamantino", 21_941),
    // 新设市镇, 估算值
    ("Boa Esperança do Norte", 7_000),
    // 全州人口最少
    ("Araguainha", 1_010),
];

/// 查询已知人口
pub fn known_population(name: &str) -> Option<u32> {
    KNOWN_POPULATIONS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, pop)| *pop)
}

/// 目录中的市镇总数
pub fn municipality_count() -> usize {
    MUNICIPALITIES_BY_REGION
        .iter()
        .map(|(_, names)| names.len())
        .sum()
}

/// 葡语排序键: 去重音 + 小写
///
/// 用于按名称排序与不区分重音的搜索
pub fn collation_key(text: &str) -> String {
    text.chars()
        .flat_map(|c| c.to_lowercase())
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}
