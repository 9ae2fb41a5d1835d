//! Localized site strings.
//!
//! Every user-facing string is a [`TranslationKey`] with exactly one
//! [`LocalizedText`] entry. Keys also carry a stable wire name (e.g.
//! `"preRegFormTitle"`) for lookups that arrive as untyped text.

use crate::i18n::Locale;

/// One string in each supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    pub ko: &'static str,
    pub en: &'static str,
    pub ja: &'static str,
}

impl LocalizedText {
    /// Get the string for a locale (may be empty for a partial entry).
    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ko => self.ko,
            Locale::En => self.en,
            Locale::Ja => self.ja,
        }
    }
}

macro_rules! translation_table {
    ($( $(#[$doc:meta])* $variant:ident => $name:literal { ko: $ko:expr, en: $en:expr, ja: $ja:expr $(,)? } ),+ $(,)?) => {
        /// Closed set of translation keys.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TranslationKey {
            $( $(#[$doc])* $variant, )+
        }

        impl TranslationKey {
            /// Every key, in table order.
            pub const ALL: &'static [TranslationKey] = &[ $( TranslationKey::$variant, )+ ];

            /// Stable wire name of the key.
            pub fn name(self) -> &'static str {
                match self {
                    $( TranslationKey::$variant => $name, )+
                }
            }

            /// Resolve a wire name to a key.
            pub fn from_name(name: &str) -> Option<TranslationKey> {
                match name {
                    $( $name => Some(TranslationKey::$variant), )+
                    _ => None,
                }
            }

            /// The localized entry for this key.
            pub fn text(self) -> LocalizedText {
                match self {
                    $( TranslationKey::$variant => LocalizedText { ko: $ko, en: $en, ja: $ja }, )+
                }
            }
        }
    };
}

translation_table! {
    // ==================== Navigation ====================
    Home => "home" { ko: "홈", en: "Home", ja: "ホーム" },
    Characters => "characters" { ko: "캐릭터", en: "Characters", ja: "キャラクター" },
    PreRegister => "preRegister" { ko: "사전예약", en: "Pre-Register", ja: "事前登録" },
    Rewards => "rewards" { ko: "보상", en: "Rewards", ja: "報酬" },
    /// Label above the language switcher
    Language => "language" { ko: "언어", en: "Language", ja: "言語" },

    // ==================== Hero ====================
    GameTitle => "gameTitle" { ko: "Realm of Shadows", en: "Realm of Shadows", ja: "Realm of Shadows" },
    HeroSubtitle => "heroSubtitle" {
        ko: "어둠 속에서 펼쳐지는 끝없는 모험",
        en: "Endless Adventures Unfold in the Darkness",
        ja: "闇の中で繰り広げられる無限の冒険",
    },
    HeroDescription => "heroDescription" {
        ko: "엘든링 스타일의 다크 판타지 세계에서 당신만의 전설을 써내려가세요",
        en: "Write your own legend in an Elden Ring-style dark fantasy world",
        ja: "エルデンリング風のダークファンタジー世界で、あなただけの伝説を紡いでください",
    },
    RegisterNow => "registerNow" { ko: "지금 사전예약하기", en: "Pre-Register Now", ja: "今すぐ事前登録" },

    // ==================== Game Introduction ====================
    GameIntroTitle => "gameIntroTitle" {
        ko: "그림자의 영역으로 떠나는 여행",
        en: "Journey to the Realm of Shadows",
        ja: "影の領域への旅",
    },
    GameIntroDesc => "gameIntroDesc" {
        ko: "고대의 저주가 깃든 어둠의 대륙에서 펼쳐지는 장대한 서사시. 선택한 길에 따라 달라지는 운명을 경험하세요.",
        en: "An epic saga unfolds on a dark continent cursed by ancient magic. Experience a destiny that changes based on your choices.",
        ja: "古代の呪いが宿る闇の大陸で繰り広げられる壮大な叙事詩。選択した道によって変わる運命を体験してください。",
    },
    FeatureStoryTitle => "featureStoryTitle" { ko: "몰입감 있는 스토리", en: "Immersive Storyline", ja: "没入感のあるストーリー" },
    FeatureStoryDesc => "featureStoryDesc" {
        ko: "플레이어의 선택에 따라 달라지는 복잡하고 깊이 있는 서사",
        en: "Complex and deep narrative that changes based on player choices",
        ja: "プレイヤーの選択によって変わる複雑で奥深い物語",
    },
    FeatureCombatTitle => "featureCombatTitle" { ko: "전략적 전투", en: "Strategic Combat", ja: "戦略的戦闘" },
    FeatureCombatDesc => "featureCombatDesc" {
        ko: "실시간 액션과 전략적 사고가 결합된 독창적인 전투 시스템",
        en: "Unique combat system combining real-time action with strategic thinking",
        ja: "リアルタイムアクションと戦略的思考が融合した独創的な戦闘システム",
    },
    FeatureGuildTitle => "featureGuildTitle" { ko: "길드 시스템", en: "Guild System", ja: "ギルドシステム" },
    FeatureGuildDesc => "featureGuildDesc" {
        ko: "동료들과 함께 거대한 보스를 물리치고 영역을 정복하세요",
        en: "Defeat massive bosses and conquer territories with your allies",
        ja: "仲間と共に巨大なボスを倒し、領域を征服しよう",
    },
    ExploreTitle => "exploreTitle" { ko: "어둠의 대륙 탐험", en: "Explore the Dark Continent", ja: "闇の大陸探検" },
    ExploreDesc => "exploreDesc" {
        ko: "신비로운 던전과 고대 유적을 발견하세요",
        en: "Discover mysterious dungeons and ancient ruins",
        ja: "神秘的なダンジョンと古代遺跡を発見しよう",
    },

    // ==================== Characters ====================
    CharactersTitle => "charactersTitle" { ko: "어둠의 전사들", en: "Warriors of Darkness", ja: "闇の戦士たち" },
    DarkKnight => "darkKnight" { ko: "암흑 기사", en: "Dark Knight", ja: "ダークナイト" },
    DarkKnightDesc => "darkKnightDesc" {
        ko: "강력한 방어력과 근접 전투 능력을 갖춘 탱커형 캐릭터",
        en: "Tank character with powerful defense and melee combat abilities",
        ja: "強力な防御力と近接戦闘能力を持つタンク型キャラクター",
    },
    BloodMage => "bloodMage" { ko: "혈법사", en: "Blood Mage", ja: "ブラッドメイジ" },
    BloodMageDesc => "bloodMageDesc" {
        ko: "생명력을 조작하는 금단의 마법을 사용하는 딜러형 캐릭터",
        en: "Dealer character who uses forbidden magic to manipulate life force",
        ja: "生命力を操る禁断の魔法を使うディーラー型キャラクター",
    },
    ShadowArcher => "shadowArcher" { ko: "그림자 궁수", en: "Shadow Archer", ja: "シャドウアーチャー" },
    ShadowArcherDesc => "shadowArcherDesc" {
        ko: "어둠에 숨어 원거리에서 적을 처치하는 원거리 딜러형 캐릭터",
        en: "Ranged dealer character who hides in shadows and eliminates enemies from afar",
        ja: "闇に隠れて遠距離から敵を倒す遠距離ディーラー型キャラクター",
    },
    RoleTank => "roleTank" { ko: "탱커", en: "Tank", ja: "タンク" },
    RoleDps => "roleDps" { ko: "딜러", en: "DPS", ja: "ディーラー" },
    RoleRangedDps => "roleRangedDps" { ko: "원거리 딜러", en: "Ranged DPS", ja: "遠距離ディーラー" },

    // ==================== Pre-registration Form ====================
    PreRegFormTitle => "preRegFormTitle" { ko: "사전예약 신청", en: "Pre-Registration", ja: "事前登録申請" },
    PreRegFormDesc => "preRegFormDesc" {
        ko: "지금 사전예약하고 독점 혜택을 받아보세요!",
        en: "Pre-register now and receive exclusive benefits!",
        ja: "今すぐ事前登録して限定特典を受け取ろう！",
    },
    Email => "email" { ko: "이메일", en: "Email", ja: "メール" },
    EmailPlaceholder => "emailPlaceholder" {
        ko: "이메일 주소를 입력하세요",
        en: "Enter your email address",
        ja: "メールアドレスを入力",
    },
    Nickname => "nickname" { ko: "닉네임", en: "Nickname", ja: "ニックネーム" },
    NicknamePlaceholder => "nicknamePlaceholder" {
        ko: "게임 내 사용할 닉네임",
        en: "Nickname to use in game",
        ja: "ゲーム内で使用するニックネーム",
    },
    PreferredCharacter => "preferredCharacter" { ko: "선호 캐릭터", en: "Preferred Character", ja: "希望キャラクター" },
    SelectCharacter => "selectCharacter" {
        ko: "캐릭터를 선택하세요",
        en: "Select a character",
        ja: "キャラクターを選択してください",
    },
    SubmitRegistration => "submitRegistration" { ko: "사전예약 완료", en: "Complete Registration", ja: "事前登録完了" },
    /// Submit button label while a submission is in flight
    Registering => "registering" { ko: "등록 중...", en: "Registering...", ja: "登録中..." },
    RegistrationBenefits => "registrationBenefits" {
        ko: "등록하시면 게임 출시 소식과 특별 혜택을 받아보실 수 있습니다.",
        en: "By registering, you will receive game release news and special benefits.",
        ja: "登録すると、ゲームリリースのお知らせや特別特典を受け取ることができます。",
    },

    // ==================== Rewards ====================
    RewardsTitle => "rewardsTitle" { ko: "사전예약 보상", en: "Pre-Registration Rewards", ja: "事前登録報酬" },
    RewardsDesc => "rewardsDesc" {
        ko: "목표 달성 시 모든 플레이어가 받는 특별 보상",
        en: "Special rewards for all players when goals are achieved",
        ja: "目標達成時に全プレイヤーが受け取る特別報酬",
    },
    Milestone1 => "milestone1" { ko: "10만 명 달성", en: "100K Milestone", ja: "10万人達成" },
    Milestone2 => "milestone2" { ko: "25만 명 달성", en: "250K Milestone", ja: "25万人達成" },
    Milestone3 => "milestone3" { ko: "50만 명 달성", en: "500K Milestone", ja: "50万人達成" },
    Reward1 => "reward1" { ko: "전설 무기 상자", en: "Legendary Weapon Box", ja: "伝説の武器ボックス" },
    Reward2 => "reward2" { ko: "레어 장비 세트", en: "Rare Equipment Set", ja: "レア装備セット" },
    Reward3 => "reward3" { ko: "독점 스킨 + 타이틀", en: "Exclusive Skin + Title", ja: "限定スキン + タイトル" },
    CurrentRegistrations => "currentRegistrations" { ko: "현재 등록자", en: "Current Registrations", ja: "現在の登録者" },
    PlayersRegistered => "playersRegistered" {
        ko: "명이 사전등록했습니다",
        en: "players have pre-registered",
        ja: "人が事前登録しました",
    },

    // ==================== Footer ====================
    AboutGame => "aboutGame" { ko: "게임 소개", en: "About Game", ja: "ゲーム紹介" },
    Support => "support" { ko: "고객지원", en: "Support", ja: "サポート" },
    Legal => "legal" { ko: "법적 정보", en: "Legal", ja: "法的情報" },
    Privacy => "privacy" { ko: "개인정보처리방침", en: "Privacy Policy", ja: "プライバシーポリシー" },
    Terms => "terms" { ko: "이용약관", en: "Terms of Service", ja: "利用規約" },
    Copyright => "copyright" {
        ko: "© 2025 Realm of Shadows. 모든 권리 보유.",
        en: "© 2025 Realm of Shadows. All rights reserved.",
        ja: "© 2025 Realm of Shadows. 全著作権所有。",
    },

    // ==================== Messages ====================
    RegistrationSuccess => "registrationSuccess" {
        ko: "사전예약이 완료되었습니다!",
        en: "Pre-registration completed!",
        ja: "事前登録が完了しました！",
    },
    RegistrationSuccessDetail => "registrationSuccessDetail" {
        ko: "게임 출시 소식을 이메일로 알려드리겠습니다!",
        en: "We will notify you about the game release via email!",
        ja: "ゲームリリースのお知らせをメールでお送りします！",
    },
    RegistrationError => "registrationError" {
        ko: "오류가 발생했습니다. 다시 시도해주세요.",
        en: "An error occurred. Please try again.",
        ja: "エラーが発生しました。再度お試しください。",
    },
    EmailRequired => "emailRequired" {
        ko: "이메일을 입력해주세요.",
        en: "Please enter your email.",
        ja: "メールアドレスを入力してください。",
    },
    InvalidEmail => "invalidEmail" {
        ko: "올바른 이메일 주소를 입력해주세요.",
        en: "Please enter a valid email address.",
        ja: "正しいメールアドレスを入力してください。",
    },
    NicknameRequired => "nicknameRequired" {
        ko: "닉네임을 입력해주세요.",
        en: "Please enter your nickname.",
        ja: "ニックネームを入力してください。",
    },
    InvalidNickname => "invalidNickname" {
        ko: "닉네임은 2-20자 사이여야 합니다.",
        en: "Nickname must be 2-20 characters.",
        ja: "ニックネームは2-20文字である必要があります。",
    },
    CharacterRequired => "characterRequired" {
        ko: "캐릭터를 선택해주세요.",
        en: "Please select a character.",
        ja: "キャラクターを選択してください。",
    },
}
