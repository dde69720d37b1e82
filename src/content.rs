// src/content.rs
// Static copy for the landing page. Everything here is marketing text;
// none of the features it describes exist behind the page.

pub const SITE_NAME: &str = "RubleMining";

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Step {
    pub number: u8,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// One bullet of a documentation section, with an optional bold lead-in.
pub struct ListItem {
    pub label: Option<&'static str>,
    pub text: &'static str,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct DocSection {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub intro: Option<&'static str>,
    pub items: &'static [ListItem],
    pub outro: Option<&'static str>,
    pub faqs: &'static [Faq],
}

pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

pub struct SocialLink {
    pub icon: &'static str,
    pub label: &'static str,
}

const fn item(text: &'static str) -> ListItem {
    ListItem { label: None, text }
}

const fn labelled(label: &'static str, text: &'static str) -> ListItem {
    ListItem { label: Some(label), text }
}

pub static FEATURES: [Feature; 3] = [
    Feature {
        icon: "👤",
        title: "Приветственный бонус",
        description: "Получите стартовый капитал при регистрации по реферальной ссылке",
    },
    Feature {
        icon: "📈",
        title: "Реферальная программа",
        description: "Зарабатывайте процент от майнинга всех приглашенных пользователей",
    },
    Feature {
        icon: "🛡️",
        title: "Автоматическое назначение",
        description: "Если у вас нет реферера, система назначит его автоматически",
    },
];

pub const MISSION: &str = "Предоставить доступный и прозрачный способ заработка через майнинг \
    криптовалюты. Мы создали систему, где каждый может начать зарабатывать независимо от опыта.";

pub static ADVANTAGES: [&str; 3] = [
    "Быстрый старт без вложений",
    "Многоуровневая реферальная система",
    "Прозрачная статистика и выплаты",
];

pub static STEPS: [Step; 4] = [
    Step {
        number: 1,
        icon: "🔗",
        title: "Получите реферальную ссылку",
        description: "Нажмите кнопку выше и получите уникальную реферальную ссылку с вашим кодом",
    },
    Step {
        number: 2,
        icon: "📤",
        title: "Поделитесь с друзьями",
        description: "Отправьте ссылку друзьям, знакомым или опубликуйте в социальных сетях",
    },
    Step {
        number: 3,
        icon: "🎁",
        title: "Получите приветственный бонус",
        description: "Когда человек перейдет по вашей ссылке, оба получите стартовый бонус",
    },
    Step {
        number: 4,
        icon: "📈",
        title: "Начните майнить",
        description: "Зарабатывайте на собственном майнинге и получайте процент от доходов рефералов",
    },
];

pub const NOTICE: &str = "Если у вас не будет реферера, система автоматически назначит его вам. \
    Это гарантирует, что вы сможете начать зарабатывать сразу после регистрации.";

pub static DOC_SECTIONS: [DocSection; 5] = [
    DocSection {
        id: "requirements",
        icon: "🖥️",
        title: "Системные требования",
        intro: Some("Минимальные требования:"),
        items: &[
            item("Стабильное интернет-соединение (минимум 1 Мбит/с)"),
            item("Современный браузер (Chrome, Firefox, Safari, Edge)"),
            item("Активный email для регистрации"),
            item("Возраст 18+ для участия в программе"),
        ],
        outro: None,
        faqs: &[],
    },
    DocSection {
        id: "referral",
        icon: "👥",
        title: "Как работает реферальная система",
        intro: Some("Реферальная программа включает несколько уровней вознаграждений:"),
        items: &[
            labelled("Приветственный бонус:", "Получите стартовый капитал при регистрации"),
            labelled("Прямые рефералы:", "10% от майнинга приглашенных пользователей"),
            labelled("Второй уровень:", "5% от майнинга рефералов ваших рефералов"),
            labelled("Бонусы за активность:", "Дополнительные награды за активных рефералов"),
        ],
        outro: Some("Все начисления происходят автоматически и отображаются в личном кабинете."),
        faqs: &[],
    },
    DocSection {
        id: "mining",
        icon: "⚙️",
        title: "Процесс майнинга",
        intro: Some("Майнинг в нашей системе происходит следующим образом:"),
        items: &[
            item("Майнинг происходит на серверной стороне, не нагружая ваше устройство"),
            item("Мощность распределяется в зависимости от вашего уровня и активности"),
            item("Доход начисляется каждые 24 часа автоматически"),
            item("Минимальная сумма для вывода средств составляет 1000 рублей"),
            item("Вывод средств осуществляется в течение 1-3 рабочих дней"),
        ],
        outro: None,
        faqs: &[],
    },
    DocSection {
        id: "security",
        icon: "🔒",
        title: "Безопасность и защита данных",
        intro: Some("Мы используем современные технологии для защиты ваших данных:"),
        items: &[
            item("SSL-шифрование для всех соединений"),
            item("Двухфакторная аутентификация (2FA)"),
            item("Регулярные проверки безопасности системы"),
            item("Шифрование персональных данных в базе данных"),
            item("Защита от DDoS-атак и взломов"),
        ],
        outro: None,
        faqs: &[],
    },
    DocSection {
        id: "faq",
        icon: "❓",
        title: "Часто задаваемые вопросы",
        intro: None,
        items: &[],
        outro: None,
        faqs: &[
            Faq {
                question: "Сколько можно заработать?",
                answer: "Доход зависит от вашей активности и количества рефералов. В среднем \
                    активные пользователи зарабатывают от 5,000 до 50,000 рублей в месяц.",
            },
            Faq {
                question: "Нужно ли вкладывать деньги?",
                answer: "Нет, вы можете начать полностью бесплатно. Получите приветственный \
                    бонус и начните майнить без вложений.",
            },
            Faq {
                question: "Как вывести заработанные средства?",
                answer: "Выберите удобный способ вывода в личном кабинете: банковская карта, \
                    электронные кошельки или криптовалюта.",
            },
        ],
    },
];

pub static FOOTER_COLUMNS: [FooterColumn; 2] = [
    FooterColumn {
        title: "Продукт",
        links: &["О проекте", "Как начать", "Документация"],
    },
    FooterColumn {
        title: "Поддержка",
        links: &["FAQ", "Связаться с нами", "Правила"],
    },
];

pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { icon: "💬", label: "Чат" },
    SocialLink { icon: "✈️", label: "Telegram" },
    SocialLink { icon: "✉️", label: "Email" },
];

pub const COPYRIGHT: &str = "© 2024 RubleMining. Все права защищены.";
