//! Static copy and data shown on the landing page.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub name: &'static str,
    /// Id of the section the link scrolls to.
    pub path: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", path: "home" },
    NavLink { name: "Sobre", path: "about" },
    NavLink { name: "EsferaNR6", path: "services" },
    NavLink { name: "Projetos", path: "projects" },
    NavLink { name: "Condições", path: "option" },
    NavLink { name: "Contato", path: "contact" },
    NavLink { name: "Login", path: "login" },
];

pub const PHONE_DISPLAY: &str = "+55 (21) 99941-7097";
pub const PHONE_HREF: &str = "tel:+5521999417097";
pub const EMAIL: &str = "mosansantos@yahoo.com.br";

const WHATSAPP_NUMBER: &str = "5521999417097";
const WHATSAPP_GREETING: &str = "Obrigado pelo contato com a EsferaDataSCI, em breve vamos retornar a solicitação, para prover um orçamento personalizado.";

/// WhatsApp deep link with the quote greeting prefilled.
pub fn whatsapp_quote_url() -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_NUMBER,
        urlencoding::encode(WHATSAPP_GREETING)
    )
}

pub fn mailto_url() -> String {
    format!("mailto:{}", EMAIL)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub end: u32,
    pub suffix: &'static str,
    pub text: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { end: 100, suffix: "%", text: "Clientes Satisfeitos" },
    Stat { end: 8, suffix: "", text: "Projetos bem sucedidos em 2025" },
    Stat { end: 300208, suffix: "+", text: "Linhas de Código entregues" },
    Stat { end: 33, suffix: "+", text: "Anos de experiência" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub name: &'static str,
    /// Suffix of the `icon-*` class drawn by the stylesheet.
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub items: &'static [&'static str],
    pub thumbs: [&'static str; 2],
}

const THUMBS_A: [&str; 2] = ["/assets/img/services/thumb-1.jpg", "/assets/img/services/thumb-2.jpg"];
const THUMBS_B: [&str; 2] = ["/assets/img/services/thumb-3.jpg", "/assets/img/services/thumb-4.jpg"];
const THUMBS_C: [&str; 2] = ["/assets/img/services/thumb-5.jpg", "/assets/img/services/thumb-6.jpg"];

pub const SERVICES: &[Service] = &[
    Service {
        name: "gestao-epi",
        icon: "wrench",
        title: "Gestão de EPI",
        description: "Cadastro completo de EPIs com CA, validade e vinculação por função/risco.",
        items: &[
            "Cadastro de EPIs com CA e validade",
            "Kits por função e por risco",
            "Bloqueio de EPI vencido/suspenso",
            "Histórico de uso por colaborador",
        ],
        thumbs: THUMBS_C,
    },
    Service {
        name: "estoque-logistica",
        icon: "package",
        title: "Estoque & Logística",
        description: "Controle multi-obra/empresa com visão centralizada e previsão de consumo.",
        items: &[
            "Multi-obra e multi-empresa",
            "Ponto de pedido e reposição",
            "Inventário e acertos",
            "Integração a estoque centralizado",
        ],
        thumbs: THUMBS_A,
    },
    Service {
        name: "entrega-rastreio",
        icon: "id-card",
        title: "Entrega & Rastreio",
        description: "Comprovantes digitais com biometria facial e rastreabilidade total de entregas.",
        items: &[
            "Identificação facial (reconhecimento biométrico)",
            "Termo de responsabilidade digital",
            "Assinatura eletrônica e biometria digital",
            "Devolução e troca com registro de motivo",
            "Rastreio completo por lote/kit/colaborador",
        ],
        thumbs: THUMBS_B,
    },
    Service {
        name: "conformidade-nr6",
        icon: "shield-check",
        title: "Conformidade NR-6",
        description: "Alertas, evidências e relatórios prontos para auditorias e fiscalizações.",
        items: &[
            "Alertas de CA a vencer/suspenso",
            "Checklist de auditoria",
            "Evidências (fotos, documentos)",
            "Relatórios para fiscalização",
        ],
        thumbs: THUMBS_C,
    },
    Service {
        name: "integracao-nr7",
        icon: "heartbeat",
        title: "Integração NR-7 (opcional)",
        description: "Conexão com ASO/PCMSO para assegurar entregas apenas a colaboradores aptos.",
        items: &[
            "Vínculo com ASO/PCMSO",
            "Bloqueio sem ASO válido",
            "Riscos por função",
            "Histórico ocupacional básico",
        ],
        thumbs: THUMBS_A,
    },
    Service {
        name: "dashboards-kpis",
        icon: "chart-line-up",
        title: "Dashboards & KPIs",
        description: "Indicadores em tempo real para custo, consumo e ruptura.",
        items: &[
            "Consumo por obra/empresa",
            "Custo por colaborador/função",
            "Top itens e rupturas",
            "Exportação CSV/XLSX",
        ],
        thumbs: THUMBS_B,
    },
    Service {
        name: "compras-fornecedores",
        icon: "shopping-cart",
        title: "Compras & Fornecedores",
        description: "Catálogo por fornecedor, comparativos e pedido sugerido.",
        items: &[
            "Catálogo por fornecedor",
            "Comparativo de preço/lead time",
            "Pedido de compra sugerido",
            "Histórico de cotações",
        ],
        thumbs: THUMBS_C,
    },
    Service {
        name: "integracoes",
        icon: "cloud-arrow-down",
        title: "Integrações",
        description: "Abertura para ERPs, planilhas e repositórios de documentos.",
        items: &[
            "Importação via planilhas",
            "API REST e webhooks",
            "Google Drive (repositório)",
            "Conectores sob demanda",
        ],
        thumbs: THUMBS_A,
    },
    Service {
        name: "alertas-notificacoes",
        icon: "bell",
        title: "Alertas & Notificações",
        description: "Avisos automáticos para evitar multas, perdas e rupturas.",
        items: &[
            "Vencimento de CA/ASO",
            "Ruptura e ponto de pedido",
            "Pendências de assinatura",
            "E-mail e mensageria (opcional)",
        ],
        thumbs: THUMBS_B,
    },
    Service {
        name: "acessos-seguranca",
        icon: "lock",
        title: "Acessos & Segurança",
        description: "Controle de perfis por papel e trilha de auditoria completa.",
        items: &[
            "Perfis: Incorporadora/Obra/Empresa",
            "Trilha de auditoria (logs)",
            "LGPD: princípios de mínimo acesso",
            "SSO/OAuth (opcional)",
        ],
        thumbs: THUMBS_C,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        title: "O que é o EsferaEPI e para quem ele foi feito?",
        description: "O EsferaEPI é um sistema de gestão de EPIs pensado para incorporadoras, obras e empreiteiras. Ele centraliza o controle de estoques, a entrega de EPIs aos colaboradores, a validade de CA, documentos e evidências de conformidade (NR6 e conexões com NR7), gerando relatórios para auditorias internas e fiscalizações.",
    },
    FaqEntry {
        title: "A instalação é demorada?",
        description: "Não. Instalação imediata. Criamos o ambiente, cadastramos sua organização e, em minutos, você já pode importar colaboradores, empresas e obras para começar a operar.",
    },
    FaqEntry {
        title: "Como o sistema controla o CA (Certificado de Aprovação)?",
        description: "Cada EPI cadastrado tem seu CA e data de validade. O sistema alerta com antecedência quando o CA está para vencer, bloqueia novas entregas de EPIs vencidos (se você desejar) e registra toda a rastreabilidade por lote/fornecedor, evitando uso de itens fora de conformidade.",
    },
    FaqEntry {
        title: "De que forma o EsferaEPI ajuda na NR6?",
        description: "A NR6 exige entrega, controle e substituição de EPIs com evidências. O sistema gera Termos de Responsabilidade (com assinatura eletrônica/biométrica opcional), mantém histórico de entregas por colaborador, controla vida útil e troca preventiva, e fornece relatórios que sustentam auditorias e inspeções.",
    },
    FaqEntry {
        title: "E a NR7 (PCMSO) — qual a relação com o EsferaEPI?",
        description: "A NR7 trata de saúde ocupacional (PCMSO). O EsferaEPI concentra evidências complementares: vincula treinamentos, ASOs e documentos ao colaborador e ao posto de trabalho, facilitando a conferência entre aptidão médica e EPIs exigidos para a função. (Observação: o sistema não substitui seu software médico/PCMSO; ele integra evidências para auditorias).",
    },
    FaqEntry {
        title: "Como o EsferaEPI ajuda a evitar multas?",
        description: "Com alertas de validade de CA, bloqueio opcional de entrega de EPI irregular, histórico completo de entregas, relatórios de conformidade por obra/empresa e rastreabilidade por colaborador e por item, você reduz falhas operacionais e mitiga riscos de autuação por descumprimento da NR6 e uso de EPIs inadequados.",
    },
    FaqEntry {
        title: "Incorporadoras podem auditar as empreiteiras? E as obras?",
        description: "Sim. A arquitetura é multi-nível - Incorporadoras: acompanham todas as obras e todas as empreiteiras vinculadas (visão 360 e relatórios comparativos). - Obras: fiscalizam colaboradores de várias empreiteiras na obra, com filtros por frente de serviço/função. Empreiteiras: visualizam somente seus colaboradores e entregas. Os perfis de acesso garantem que cada papel veja apenas o que deve.",
    },
    FaqEntry {
        title: "Como é a cobrança do sistema?",
        description: "O valor é por quantidade de funcionários ativos (pay-as-you-grow). Você pode começar pequeno e escalar conforme a operação cresce. Obras e empreiteiras entram no mesmo ecossistema, sem surpresas de custo por obra.",
    },
    FaqEntry {
        title: "Quais são os principais benefícios práticos no dia a dia?",
        description: "Rastreabilidade total: quem recebeu o quê, quando, de qual lote/CA. Prevenção: alertas de CA e trocas programadas. Produtividade: check-out de EPIs rápido (com assinatura eletrônica/biometria facial, opcional). Visão executiva: dashboards por obra/empresa/função. Evidência para auditoria: documentos e logs organizados em segundos.",
    },
    FaqEntry {
        title: "O EsferaEPI integra com outros sistemas e facilita a migração?",
        description: "Sim. Você pode importar planilhas (Excel/CSV) de colaboradores, funções e EPIs, e integrar via API com RH, compras e ERPs (para consumo/estoque). Também é possível anexar documentos comprobatórios (certificados, ASOs, manuais) por colaborador e por EPI.",
    },
    FaqEntry {
        title: "O sistema é seguro e está em conformidade com a LGPD?",
        description: "Sim. Contamos com perfis de acesso, criptografia em trânsito, logs de auditoria, segregação de dados entre empresas/obras e políticas de retenção. As informações pessoais são tratadas segundo boas práticas de LGPD. Há backup e planos de contingência para garantir disponibilidade.",
    },
    FaqEntry {
        title: "Como começar e quais são os prazos de onboarding?",
        description: "Basta criar sua conta e enviar a base mínima (obras, empresas, colaboradores e EPIs). Em poucas horas, sua operação já está registrando entregas e gerando evidências. Oferecemos suporte, materiais de treinamento rápido e templates de importação para acelerar.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub description: &'static str,
    pub badge: &'static str,
    pub employees: &'static str,
    pub logins: &'static str,
    pub monthly_price: f64,
    pub yearly_price: f64,
    pub features: &'static [&'static str],
    pub highlight: bool,
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        description: "Ideal para pequenas empresas começarem",
        badge: "Mais Popular",
        employees: "Até 100 funcionários",
        logins: "3 logins simultâneos",
        monthly_price: 99.90,
        yearly_price: 999.99,
        features: &[
            "Gestão de entrega de EPIs",
            "Identificação facial básica",
            "Controle biométrico digital",
            "Relatórios de conformidade NR-6",
            "Alertas de validade",
            "Suporte via email",
            "Backup automático diário",
        ],
        highlight: false,
    },
    Plan {
        name: "Professional",
        description: "Para empresas em crescimento",
        badge: "Recomendado",
        employees: "Até 300 funcionários",
        logins: "5 logins simultâneos",
        monthly_price: 279.99,
        yearly_price: 2790.90,
        features: &[
            "Tudo do plano Starter",
            "Identificação facial avançada (anti-fraude)",
            "Integração biométrica completa",
            "Previsão de estoque com IA",
            "Dashboards personalizáveis",
            "Conformidade NR-6 + NR-7",
            "Suporte prioritário (chat + email)",
            "Relatórios customizados",
            "API para integrações",
        ],
        highlight: true,
    },
    Plan {
        name: "Enterprise",
        description: "Solução completa para grandes operações",
        badge: "Máximo Poder",
        employees: "Acima de 500 funcionários",
        logins: "Logins ilimitados",
        monthly_price: 450.00,
        yearly_price: 4500.00,
        features: &[
            "Tudo do plano Professional",
            "Identificação facial com IA (liveness detection)",
            "IA avançada para análise preditiva",
            "Multi-filiais e centros de custo",
            "Gestão completa de auditorias",
            "Suporte 24/7 dedicado",
            "Onboarding personalizado",
            "Treinamento da equipe incluído",
            "SLA garantido de 99.9%",
            "Customizações sob demanda",
        ],
        highlight: false,
    },
];
