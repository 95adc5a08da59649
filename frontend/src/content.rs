use crate::controllers::slideshow::ImageSlide;

pub struct NavItem {
    pub section_id: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { section_id: "concept", label: "Lokahiで働くことで得られる事" },
    NavItem { section_id: "staff", label: "スタッフ紹介" },
    NavItem { section_id: "requirements", label: "募集要項" },
    NavItem { section_id: "qa", label: "よくある質問" },
    NavItem { section_id: "owner-message", label: "オーナー挨拶" },
];

pub const SLIDESHOW_IMAGES: &[ImageSlide] = &[
    ImageSlide { source: "/image/t1.jpeg", alt_text: "店内の様子" },
    ImageSlide { source: "/image/t2.jpeg", alt_text: "店内の様子" },
    ImageSlide { source: "/image/t3.jpeg", alt_text: "店内の様子" },
    ImageSlide { source: "/image/t4.jpeg", alt_text: "店内の様子" },
    ImageSlide { source: "/image/gaikan1.JPG", alt_text: "外観の様子" },
];

pub const HERO_TAGLINE: &str = "No Lokahi No Life";
pub const HERO_MESSAGE: &str = "「やりたいこと」より先に、\n「自分らしさ」を。\n環境の変化に寄り添い、\nあなたの人生に合わせた働き方を。";

pub const CONCERNS: &[&str] = &[
    "将来のライフスタイルが不安...\n結婚や出産後も続けられる仕事なのかな",
    "キャリアの見通しが持てない...\n技術以外の成長の機会が欲しい",
    "自分らしい働き方ができるか...\n環境の変化に対応できるのかな",
];

pub const SOLUTIONS: &[&str] = &[
    "ライフスタイルに合わせた働き方✨\n結婚・出産後の復職実績が豊富です",
    "キャリアアップのための環境を整えています✨あなたの希望に合わせた働き方が可能です",
    "1店舗だから実現できる柔軟性✨\n人生の変化に寄り添える環境があります",
];

pub struct Feature {
    pub marker: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub highlight: Option<&'static str>,
    pub delay_ms: u32,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        marker: "①",
        title: "落ち着いた環境で施術に集中できる",
        body: "駅前の商店街に位置する、マンションの1室。\n女性限定の完全予約制サロンのため、\n落ち着いた環境で\nお客様一人一人と向き合えます。\nリピーターの多い、アットホームな雰囲気で\n活気のある職場環境です。",
        highlight: None,
        delay_ms: 100,
    },
    Feature {
        marker: "②",
        title: "安心して長く働ける\n充実した環境があります",
        body: "業界水準の給与体系で安定して働けます。\n完全週休2日制・残業なしの環境で、\n現在は全員がママさんスタッフとして活躍中。\n出産後の復職実績も豊富で、",
        highlight: Some("長く安心して働ける職場づくりを大切にしています"),
        delay_ms: 300,
    },
    Feature {
        marker: "③",
        title: "自分らしいキャリアを\n自由に選択できる",
        body: "月1回のセミナーでは、\n技術だけでなく、経営やお金の知識など\n幅広い学びの機会を提供。\n学びたい技術があれば、費用は会社負担で\n外部講習に行く事も可能など、\nキャリアアップを目指す方への環境も充実。",
        highlight: Some("あなたの描く理想の人生に合わせて、\n自由に選択できる環境があります"),
        delay_ms: 500,
    },
];

pub struct Benefit {
    pub title: &'static str,
    pub image: &'static str,
    pub body: &'static str,
    pub delay_ms: u32,
}

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        title: "自分の価値観で働ける喜び",
        image: "/image/kazoku.jpg",
        body: "「こうあるべき」という固定観念から解放されます。売上や組織の価値観に縛られず、あなたが大切にしたいものを優先できる。自分の人生を、自分の価値観で働くことができる環境です。",
        delay_ms: 100,
    },
    Benefit {
        title: "新しい可能性との出会い",
        image: "/image/sutoresu.jpg",
        body: "技術だけでなく、経営やお金の知識を得ることで、人生の選択肢が広がっていきます。「ネイリスト・アイリスト」の枠を超えて、自分の可能性を再発見でき、新しい夢や目標に出会える場所です。",
        delay_ms: 200,
    },
    Benefit {
        title: "心からの笑顔を取り戻せる",
        image: "/image/newtokutyou.jpg",
        body: "人間関係の悩みやプレッシャーから解放され、本来の自分を取り戻せます。仕事を楽しみ、プライベートも充実させ、自分の人生を豊かに、より生きやすくなります。",
        delay_ms: 300,
    },
];

pub struct ScheduleEntry {
    pub time: &'static str,
    pub activity: &'static str,
    pub note: Option<&'static str>,
}

pub const EARLY_SHIFT: &[ScheduleEntry] = &[
    ScheduleEntry {
        time: "8:30",
        activity: "店内清掃、カルテ管理、予約確認等お客様ご来店前の準備",
        note: None,
    },
    ScheduleEntry {
        time: "9:00-17:30",
        activity: "施術\nチームとして自分以外のスタッフフォローもできる範囲で行い、助け合う",
        note: None,
    },
    ScheduleEntry {
        time: "17:30以降",
        activity: "最終予約終了後、清掃、売上管理、カルテ記入",
        note: Some("※遅番の場合19時頃終了"),
    },
];

pub struct StaffMember {
    pub image: &'static str,
    pub name: &'static str,
    pub position: &'static str,
    pub message: &'static str,
}

pub const STAFF: &[StaffMember] = &[
    StaffMember {
        image: "/image/asan.png",
        name: "Aさん",
        position: "入店1ヶ月",
        message: "他店でネイリスト歴2年、美容師免許も取得していてまつ毛パーマもできるハイブリッドな働き方です。\n\n人間関係はみんなが無理なく働いていて、ゆったりとしたいい雰囲気。\n\n結婚後や出産後に働き方を変えられるのも魅力です。\n\n自分の気持ちとお店の進み具合などのすり合わせを定期的に面談でしてもらえたり、\n\n自分は朝が苦手なので\n相談すると早めに出勤時間を対応してもらえた事も安心できました。",
    },
    StaffMember {
        image: "/image/bsan.png",
        name: "Bさん",
        position: "未経験入店",
        message: "私は未経験で入店し、アイリスト歴2年です。\n\nパーマやエクステができるようになってから、ネイルにも興味がありセルフでもやっていたのでネイリストの道も挑戦させて貰いました。\n\nただ、アイとの両立が思った以上に難しく自分の子育てもあり今は断念しましたが、\n\nオーナーは、\n\n「やりたくなったらまた教えてね。挑戦する人を応援したいから」\n\nと暖かい言葉をかけてくれました。\n\n今はアイに集中していますが、それで教えてくれた先輩方とギクシャクする事もなく\n\n「今はできない」という事を一緒に受け止めてくれました。\nこのお店に来て良かったです。",
    },
];

pub struct DetailGroup {
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

pub struct RoleDetail {
    pub role: &'static str,
    pub groups: &'static [DetailGroup],
}

pub enum JobDetail {
    Text(&'static str),
    Groups(&'static [DetailGroup]),
    Roles(&'static [RoleDetail]),
}

pub struct JobDetailRow {
    pub title: &'static str,
    pub detail: JobDetail,
}

const CONTRACT_HOURS: &str = "業務委託\n・週1回〜週6回、シフト制、時短勤務OK\n・09:00〜17:00（時短応相談）\n・11:00〜19:00（時短応相談）\n・13:00〜21:00（時短応相談）";

pub const JOB_DETAILS: &[JobDetailRow] = &[
    JobDetailRow {
        title: "勤務地",
        detail: JobDetail::Text("神奈川県鎌倉市大船1-13-15 skyビル203（大船駅徒歩3分）"),
    },
    JobDetailRow {
        title: "募集職種",
        detail: JobDetail::Roles(&[
            RoleDetail {
                role: "ネイリスト",
                groups: &[
                    DetailGroup {
                        heading: "応募条件",
                        items: &["経験者のみ", "JNECネイリスト検定（旧JNA）必要"],
                    },
                    DetailGroup {
                        heading: "給与",
                        items: &["パート：時給1,225円〜", "社員：19万円〜", "業務委託：完全歩合、出来高40％〜50％"],
                    },
                    DetailGroup {
                        heading: "勤務時間",
                        items: &[
                            "正社員\n・8:30〜17:30（時短応相談）\n・9:00〜18:00（時短応相談）\n・10:00〜19:00（時短応相談）",
                            "アルバイト・パート\n・8:30〜17:30（時短応相談）\n・9:00〜18:00（時短応相談）\n・10:00〜19:00（時短応相談）",
                            CONTRACT_HOURS,
                            "最大7時間勤務、3時間からOK",
                        ],
                    },
                    DetailGroup {
                        heading: "仕事内容",
                        items: &["スカルプチュア", "ジェルネイル", "パリジェンヌ、マツエク、まつげパーマも出来る方、大歓迎！"],
                    },
                ],
            },
            RoleDetail {
                role: "アイリスト",
                groups: &[
                    DetailGroup {
                        heading: "応募条件",
                        items: &["美容師免許必要", "未経験OK"],
                    },
                    DetailGroup {
                        heading: "給与",
                        items: &["正社員：月給19.0万円〜25.0万円", "アルバイト・パート：時給1,162円〜", "業務委託：完全歩合、出来高40％〜50％"],
                    },
                    DetailGroup {
                        heading: "勤務時間",
                        items: &[
                            "正社員\n・09:00〜17:00（時短応相談）\n・11:00〜19:00（時短応相談）\n・13:00〜21:00（時短応相談）",
                            "アルバイト・パート\n・09:00〜21:00（時短応相談）\n・1日3時間からOK",
                            CONTRACT_HOURS,
                            "最大7時間勤務、3時間からOK",
                        ],
                    },
                    DetailGroup {
                        heading: "仕事内容",
                        items: &["まつげパーマ", "アイラッシュ", "まつげエクステ", "マツエク、パリジェンヌ、まつげパーマの施術"],
                    },
                ],
            },
        ]),
    },
    JobDetailRow {
        title: "休日・休暇",
        detail: JobDetail::Groups(&[DetailGroup {
            heading: "休日制度",
            items: &[
                "完全週休2日制",
                "日曜休み",
                "土日休み",
                "夏季冬季休暇有り",
                "希望休、勤務時間は考慮致します",
                "業務委託：土日出勤出来る方、大歓迎★",
            ],
        }]),
    },
    JobDetailRow {
        title: "福利厚生",
        detail: JobDetail::Groups(&[
            DetailGroup {
                heading: "基本福利厚生",
                items: &[
                    "インセンティブあり",
                    "ノルマなし",
                    "社会保険完備",
                    "寮完備",
                    "交通費支給",
                    "独立・開業支援",
                    "制服あり",
                    "育児休暇あり",
                    "社員登用あり",
                ],
            },
            DetailGroup {
                heading: "交通費・その他",
                items: &["交通費：社員15,000円まで、パート10,000円まで", "エプロン貸出"],
            },
        ]),
    },
];

pub struct WantedProfile {
    pub main: &'static str,
    pub sub: &'static str,
}

pub const WANTED: &[WantedProfile] = &[
    WantedProfile {
        main: "ネイリスト経験者で、技術を向上させたい",
        sub: "JNECネイリスト検定（旧JNA）をお持ちで、スカルプチュアやジェルネイルの技術を磨きたい方",
    },
    WantedProfile {
        main: "美容師免許をお持ちで、アイリストに挑戦したい",
        sub: "まつげパーマ、アイラッシュ、まつげエクステの技術を学び、ネイルも出来る方大歓迎",
    },
    WantedProfile {
        main: "柔軟な働き方を求める方",
        sub: "パート、正社員、業務委託から選択可能。週1回から週6回まで、シフト制で働けます",
    },
    WantedProfile {
        main: "学び続けたい、成長したい方",
        sub: "費用は会社負担で外部講習に参加可能。自己成長もできる環境です",
    },
    WantedProfile {
        main: "チームワークを大切にできる方",
        sub: "スタッフ同士が仲良く、不安や心配事はみんなで解決。仲間の夢を応援できる方",
    },
];

pub struct QaItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const QA_INTRO: &str = "あなたの好きな働き方、好きな作業、\nやりたいこと、やりたくないこと、\n遠慮なく話し合っていきましょう！";

pub const QA_ITEMS: &[QaItem] = &[
    QaItem {
        question: "働く日数を途中から減らす働き方は可能ですか？どんな働き方がありますか？",
        answer: "パート、業務委託があります！ネイリストに疲れてしまったら、アイリスト、系列の美容院等もございます。美容学校に通いながらアシスタント業務をしているスタッフもおりますので遠慮なくご相談下さい。",
    },
    QaItem {
        question: "お給料の仕組みを教えて欲しいです",
        answer: "社員は売上の30%、業務委託40%、パート　時給1225円〜※各種歩合がつきます",
    },
    QaItem {
        question: "自分に寄り添って一緒に伴走してもらえるのでしょうか？",
        answer: "もちろんです。みんなで一人ひとりに合わせた「その人の個」を大切にする事が、チームに繋がっていきます。",
    },
];

/// A paragraph of the owner's message with an optional emphasised lead.
pub struct OwnerParagraph {
    pub lead: Option<&'static str>,
    pub text: &'static str,
}

pub const OWNER_NAME: &str = "片川";
pub const OWNER_IMAGE: &str = "/image/KATAGAWA.jpg";

pub const OWNER_MESSAGE: &[OwnerParagraph] = &[
    OwnerParagraph {
        lead: Some("スタッフ1人1人が、より働きやすい環境作りを第一に考えています。"),
        text: "お気軽にご応募ください。高校卒業後、通信制のスクールに通いながら働いているスタッフ、子供の学校のあいだに働いているスタッフ、毎日フル活動しているスタッフと働き方は様々です！どこよりも働きやすく長くお仕事できる環境が整ってます！",
    },
    OwnerParagraph {
        lead: None,
        text: "スタッフみんながとても仲良く、不安や心配な事はみんなで解決していきます。\nまた、学びたい技術があれば、できるスタッフに教わったり、費用は会社負担で外部講習に行く事も可能☆あなたの可能性は無限大！一人一人が自立をし、仲間の夢を応援するサロンです！",
    },
    OwnerParagraph {
        lead: None,
        text: "年間行事では、BBQ、入社式、レクリエーション等開催！他店のスタッフとも交流出来ます(^^)",
    },
];

pub const OWNER_CLOSING: &str = "毎日楽しく働きたい、学びたい、笑顔でいたい！\nそんな方は是非、一緒に働きましょう！！";

pub const SHOP_ADDRESS: &str = "神奈川県鎌倉市大船1-13-15 skyビル203";
pub const SHOP_PHONE: &str = "052-693-6609";
pub const SHOP_HOURS: &str = "09:00〜21:00";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::slideshow::Slides;

    #[test]
    fn slideshow_images_form_a_valid_slide_list() {
        let slides = Slides::new(SLIDESHOW_IMAGES).unwrap();
        assert_eq!(slides.len(), 5);
        assert!(slides.iter().all(|s| s.source.starts_with("/image/") && !s.alt_text.is_empty()));
    }

    #[test]
    fn concerns_and_solutions_pair_up() {
        assert_eq!(CONCERNS.len(), SOLUTIONS.len());
    }

    #[test]
    fn nav_targets_are_unique() {
        let mut ids: Vec<_> = NAV_ITEMS.iter().map(|n| n.section_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), NAV_ITEMS.len());
    }

    #[test]
    fn feature_delays_are_staggered() {
        assert!(FEATURES.windows(2).all(|w| w[0].delay_ms < w[1].delay_ms));
        assert!(BENEFITS.windows(2).all(|w| w[0].delay_ms < w[1].delay_ms));
    }

    #[test]
    fn every_job_detail_row_has_content() {
        for row in JOB_DETAILS {
            let has_content = match &row.detail {
                JobDetail::Text(text) => !text.is_empty(),
                JobDetail::Groups(groups) => groups.iter().all(|g| !g.items.is_empty()),
                JobDetail::Roles(roles) => roles.iter().all(|r| r.groups.iter().all(|g| !g.items.is_empty())),
            };
            assert!(has_content, "{} is empty", row.title);
        }
    }
}
