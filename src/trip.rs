//! Build-time content for the Fukuoka 2025 trip: flights, hotels, saved
//! spots, day plans, phrases and emergency contacts.
//!
//! Everything here is fixed at compile time and display-only. The expense
//! ledger is the only user-writable data in the application.

use crate::model::{
    Activity, DayOption, DayPlan, EmergencyContact, FlightInfo, FlightLeg, HotelInfo, Phrase,
    SavedSpot, WeatherKind,
};

pub const TRIP_TITLE: &str = "福岡優雅之旅 2025";
pub const TRIP_DATES: &str = "2025/11/28 - 12/01";

pub fn flights() -> Vec<FlightInfo> {
    vec![
        FlightInfo {
            leg: FlightLeg::Outbound,
            date: "11/28 (五)",
            code: "BR102",
            route: "16:25 台北 TPE ➝ 19:55 福岡 FUK",
        },
        FlightInfo {
            leg: FlightLeg::Return,
            date: "12/01 (一)",
            code: "BR101",
            route: "20:55 福岡 FUK ➝ 22:40 台北 TPE",
        },
    ]
}

pub fn hotels() -> Vec<HotelInfo> {
    vec![
        HotelInfo {
            dates: "11/28 (第1晚)",
            name: "Band Hotel 博多",
            area: "近博多車站筑紫口",
            url: "https://www.google.com/maps/search/?api=1&query=Band+Hotel+Hakata",
        },
        HotelInfo {
            dates: "11/29 (第2晚)",
            name: "三井花園飯店福岡中洲",
            area: "中洲川端站",
            url: "https://www.google.com/maps/search/?api=1&query=Mitsui+Garden+Hotel+Fukuoka+Nakasu",
        },
        HotelInfo {
            dates: "11/30 (第3晚)",
            name: "Hotel Il Palazzo",
            area: "春吉 (近中洲)",
            url: "https://www.google.com/maps/search/?api=1&query=Hotel+Il+Palazzo+Fukuoka",
        },
    ]
}

pub fn emergency_contacts() -> Vec<EmergencyContact> {
    vec![
        EmergencyContact {
            name: "台灣福岡辦事處",
            number: "080-1002-2003",
        },
        EmergencyContact {
            name: "警察 / 救護車",
            number: "110 / 119",
        },
    ]
}

/// The saved points of interest, including the architecture pilgrimage stops.
pub fn saved_spots() -> Vec<SavedSpot> {
    vec![
        SavedSpot::new(
            "spot-il-palazzo",
            "Hotel Il Palazzo",
            "Aldo Rossi 在日本的代表作。外觀如神殿般的無窗立面，內部經過重新設計，是後現代主義建築經典。",
            "https://goo.gl/maps/IlPalazzo",
            33.5891,
            130.4068,
            Some("Aldo Rossi"),
        ),
        SavedSpot::new(
            "spot-acros",
            "ACROS 福岡",
            "Emilio Ambasz 設計的「綠色階梯山」，將建築與公園融為一體。",
            "https://goo.gl/maps/ACROS",
            33.5900,
            130.4015,
            Some("Emilio Ambasz"),
        ),
        SavedSpot::new(
            "spot-dazaifu-sb",
            "星巴克 太宰府天滿宮表參道店",
            "隈研吾運用傳統「地獄組」木結構，創造出流動的空間感。",
            "https://goo.gl/maps/StarbucksDazaifu",
            33.5209,
            130.5332,
            Some("隈研吾 (Kengo Kuma)"),
        ),
        SavedSpot::new(
            "spot-dazaifu",
            "太宰府天滿宮 (臨時本殿)",
            "藤本壯介設計的「漂浮森林」。在本殿整修期間的臨時居所，屋頂種滿植物。",
            "https://goo.gl/maps/Dazaifu",
            33.5215,
            130.5349,
            Some("藤本壯介 (Sou Fujimoto)"),
        ),
        SavedSpot::new(
            "spot-museum",
            "九州國立博物館",
            "菊竹清訓作品。巨大的藍色流線屋頂，象徵著海洋與山的波動。",
            "https://goo.gl/maps/KyushuNationalMuseum",
            33.5196,
            130.5385,
            Some("菊竹清訓 (Kiyonori Kikutake)"),
        ),
        SavedSpot::new(
            "spot-art-museum",
            "福岡市美術館",
            "前川國男晚年代表作。紅褐色磁磚與拱形天花板，展現穩重的現代主義風格。",
            "https://goo.gl/maps/FukuokaArtMuseum",
            33.5848,
            130.3789,
            Some("前川國男 (Kunio Maekawa)"),
        ),
        SavedSpot::new(
            "spot-city-museum",
            "福岡市博物館",
            "前川國男設計。宏偉的拱門與玻璃帷幕，與福岡塔相呼應。",
            "https://goo.gl/maps/FukuokaCityMuseum",
            33.5898,
            130.3490,
            Some("前川國男 (Kunio Maekawa)"),
        ),
        SavedSpot::new(
            "spot-fukuoka-tower",
            "福岡塔",
            "日建設計作品。8000片半反射玻璃覆蓋的「光之塔」。",
            "https://goo.gl/maps/FukuokaTower",
            33.5932,
            130.3515,
            Some("日建設計 (Nikken Sekkei)"),
        ),
        SavedSpot::new(
            "spot-nexus",
            "Nexus World",
            "集合住宅群，建築大師 Rem Koolhaas 與 Steven Holl 的早期實驗性作品。",
            "https://goo.gl/maps/NexusWorld",
            33.6595,
            130.4190,
            Some("Rem Koolhaas, Steven Holl 等"),
        ),
        SavedSpot::new(
            "spot-hakata",
            "博多車站 (Hakata Station)",
            "九州交通樞紐，聖誕市集與購物中心所在地。",
            "https://goo.gl/maps/HakataStation",
            33.5897,
            130.4207,
            None,
        ),
        SavedSpot::new(
            "spot-futamigaura",
            "糸島 夫婦岩",
            "白色鳥居與夕陽絶景。",
            "https://goo.gl/maps/Futamigaura",
            33.6425,
            130.1989,
            None,
        ),
    ]
}

/// Looks up a saved spot by id.
pub fn find_spot(id: &str) -> Option<SavedSpot> {
    saved_spots().into_iter().find(|spot| spot.id() == id)
}

pub fn phrases() -> Vec<Phrase> {
    vec![
        Phrase {
            label: "不懂日文",
            zh: "不好意思，我不會說日文。",
            ja: "すみません、日本語が話せません。",
            romaji: "Sumimasen, Nihongo ga hanasemasen.",
        },
        Phrase {
            label: "飲食禁忌",
            zh: "我不要蔥、薑、蒜，謝謝。",
            ja: "ネギ、ショウガ、ニンニクは入れないでください。",
            romaji: "Negi, Shouga, Ninniku wa irenaide kudasai.",
        },
        Phrase {
            label: "尋找廁所",
            zh: "請問廁所在哪裡？",
            ja: "お手洗いはどこですか？",
            romaji: "Otearai wa doko desu ka?",
        },
        Phrase {
            label: "詢問價格",
            zh: "請問這個多少錢？",
            ja: "これはいくらですか？",
            romaji: "Kore wa ikura desu ka?",
        },
        Phrase {
            label: "詢問免稅",
            zh: "請問這個有免稅嗎？",
            ja: "これは免税（Tax Free）になりますか？",
            romaji: "Kore wa menzei ni narimasu ka?",
        },
    ]
}

/// The four-day schedule. Day 4 depends on the chosen option: plan A visits
/// Ohori Park and the art museum, plan B heads out to Itoshima.
pub fn day_plans(option: DayOption) -> Vec<DayPlan> {
    vec![day_1(), day_2(), day_3(), day_4(option)]
}

fn day_1() -> DayPlan {
    DayPlan {
        id: "day1",
        date: "11/28",
        weekday: "五",
        weather: WeatherKind::Cloudy,
        weather_temp: "12°C",
        activities: vec![
            Activity::new(
                "d1-1",
                "19:55 - 21:00",
                "抵達福岡 & 飯店 Check-in",
                "BR102 抵達福岡。搭乘計程車前往博多站飯店放行李。",
            )
            .tips("出關預留1小時，計程車招呼站位於國內線航廈前（需搭接駁車）。")
            .map_link("https://www.google.com/maps/search/?api=1&query=Band+Hotel+Hakata"),
            Activity::new(
                "d1-2",
                "21:00 - 22:00",
                "晚餐：博多烏龍麵",
                "因幡うどん (Inaba Udon)。博多烏龍麵口感軟綿溫潤，適合搭機後享用，不傷胃。",
            )
            .hours("至 23:00")
            .must_try(&["牛蒡天婦羅烏龍麵 (ごぼう天うどん)", "稻荷壽司"]),
            Activity::new(
                "d1-3",
                "22:00 - 22:30",
                "博多車站聖誕市集",
                "欣賞站前廣場燈飾 (光之街)，感受日本的聖誕氣氛。",
            )
            .hours("至 24:00")
            .must_try(&["熱紅酒 (附馬克杯)", "吉拿棒"]),
        ],
    }
}

fn day_2() -> DayPlan {
    DayPlan {
        id: "day2",
        date: "11/29",
        weekday: "六",
        weather: WeatherKind::Sunny,
        weather_temp: "14°C",
        activities: vec![
            Activity::new(
                "d2-1",
                "09:00 - 09:40",
                "前往太宰府",
                "搭乘旅人號巴士或西鐵電車前往太宰府。",
            )
            .tips("若搭西鐵，可注意是否搭到「旅人」觀光列車，車廂有特殊彩繪。"),
            Activity::new(
                "d2-2",
                "10:00 - 11:30",
                "太宰府天滿宮",
                "參觀藤本壯介設計的「臨時本殿」(漂浮森林)，屋頂種滿植物，非常特別。",
            )
            .hours("06:30 - 18:30")
            .must_try(&["梅枝餅 (參道上任選一家現烤的)"])
            .tips("摸御神牛的頭可以長智慧。")
            .map_link("https://www.google.com/maps/search/?api=1&query=Dazaifu+Tenmangu"),
            Activity::new(
                "d2-3",
                "11:30 - 12:00",
                "表參道星巴克",
                "隈研吾設計。運用傳統「地獄組」木結構，不用釘子接合，從內部延伸至街道。",
            )
            .hours("08:00 - 20:00")
            .tips("店內座位不多，建議外帶拍照即可。"),
            Activity::new(
                "d2-4",
                "14:30 - 16:30",
                "天神商圈 & ACROS 福岡",
                "逛街前先看建築：ACROS 福岡 (Emilio Ambasz)。著名的階梯狀綠建築，可從公園側拍照。",
            )
            .hours("10:00 - 20:00")
            .souvenirs(&["岩田屋百貨", "茅乃舍高湯包", "Press Butter Sand"])
            .map_link("https://www.google.com/maps/search/?api=1&query=ACROS+Fukuoka"),
            Activity::new(
                "d2-5",
                "18:30 - 20:00",
                "晚餐：EEL EIGHT 鰻魚飯",
                "中洲川端附近的優雅鰻魚料理，環境舒適適合長輩。",
            )
            .hours("11:00 - 21:00")
            .reservation("★ 已預約 18:30 (Name: Chen)")
            .must_try(&["鰻魚飯三吃 (Hitsumabushi)", "白燒鰻魚"])
            .highlighted()
            .map_link("https://www.google.com/maps/search/?api=1&query=EEL+EIGHT+Fukuoka"),
            Activity::new(
                "d2-6",
                "20:30",
                "入住：三井花園飯店",
                "位於中洲，有大浴場可以放鬆。",
            )
            .tips("記得帶飯店卡去大浴場。"),
        ],
    }
}

fn day_3() -> DayPlan {
    DayPlan {
        id: "day3",
        date: "11/30",
        weekday: "日",
        weather: WeatherKind::Cloudy,
        weather_temp: "15°C",
        activities: vec![
            Activity::new(
                "d3-1",
                "10:00 - 12:00",
                "麵包超人兒童博物館",
                "位於博多 Riverain Mall 5樓 (日建設計)。適合拍照與購買限定商品。",
            )
            .hours("10:00 - 17:00")
            .souvenirs(&["博物館限定紅豆麵包", "角色造型氣球"]),
            Activity::new(
                "d3-2",
                "12:30 - 13:30",
                "Pain Stock 麵包店 (箱崎本店)",
                "福岡評價最高的麵包店，被譽為「日本最好吃的明太法國」。",
            )
            .hours("10:00 - 18:00")
            .must_try(&["明太法國麵包 (Mentaiko France)", "蜂蜜吐司"]),
            Activity::new(
                "d3-3",
                "15:00 - 17:00",
                "福岡塔 & 博物館區",
                "搭車跨越海灣前往百道濱。福岡塔 (日建設計) 與一旁的福岡市博物館 (前川國男) 形成強烈對比。",
            )
            .hours("09:30 - 22:00")
            .map_link("https://www.google.com/maps/search/?api=1&query=Fukuoka+City+Museum"),
            Activity::new(
                "d3-4",
                "18:00",
                "Check-in: Hotel Il Palazzo",
                "★ 建築巡禮重點：Aldo Rossi 的大師之作。無窗的紅褐色立面，如神殿般莊嚴。內部剛完成翻新，是傳奇的設計飯店。",
            )
            .tips("Check-in 大廳位於二樓，設計非常前衛，記得拍照。")
            .highlighted()
            .map_link("https://www.google.com/maps/search/?api=1&query=Hotel+Il+Palazzo"),
            Activity::new(
                "d3-5",
                "19:00",
                "晚餐：春吉/中洲周邊",
                "飯店位於春吉，周圍有很多時髦的居酒屋與餐廳。",
            )
            .must_try(&["博多一口餃子", "串燒"]),
        ],
    }
}

fn day_4(option: DayOption) -> DayPlan {
    let mut activities = match option {
        DayOption::A => vec![Activity::new(
            "d4-a-1",
            "10:00 - 12:30",
            "大濠公園 & 美術館",
            "參觀福岡市美術館 (前川國男)。紅褐色磁磚外牆與拱形天花板是其特色。館外有草間彌生南瓜。",
        )
        .hours("09:30 - 17:30")
        .must_try(&["館內咖啡廳：大濠公園景色"])
        .map_link("https://www.google.com/maps/search/?api=1&query=Fukuoka+Art+Museum")],
        DayOption::B => vec![Activity::new(
            "d4-b-1",
            "09:30 - 13:00",
            "糸島 夫婦岩",
            "白色鳥居與絕美海景 (建議包車)。",
        )
        .hours("全天開放")
        .must_try(&["糸島布丁 (海鹽口味)", "Current 咖啡"])
        .souvenirs(&["手工海鹽", "當地醬油"])
        .highlighted()
        .map_link("https://www.google.com/maps/search/?api=1&query=Sakurai+Futamigaura")],
    };
    activities.extend([
        Activity::new(
            "d4-common-1",
            "14:30 - 15:30",
            "博多車站最後採買",
            "購買伴手禮 (努努雞、博多通饅頭)，之後前往機場。",
        )
        .hours("09:00 - 21:00")
        .souvenirs(&["博多通饅頭 (必買)", "努努雞 (冷炸雞)", "Menbei (明太仙貝)"]),
        Activity::new(
            "d4-common-2",
            "16:00 (出發)",
            "前往機場 (FUK)",
            "搭計程車去機場。Check-in 後逛國內線航廈。",
        )
        .hours("開櫃: 前 2.5 小時")
        .tips("國內線航廈比國際線好逛，有時間可以先去國內線買「福砂屋」。")
        .souvenirs(&["福砂屋長崎蛋糕", "Royce 巧克力洋芋片"]),
    ]);
    DayPlan {
        id: "day4",
        date: "12/01",
        weekday: "一",
        weather: WeatherKind::Cloudy,
        weather_temp: "13°C",
        activities,
    }
}
