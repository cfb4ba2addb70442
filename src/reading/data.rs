//! Candidate romanizations in descending frequency for personal names.
//! Simplified and Traditional twins carry identical readings.

use phf::{phf_map, Map};

#[rustfmt::skip]
pub(crate) static READINGS: Map<char, &'static [&'static str]> = phf_map! {
    // ── POLYPHONIC ───────────────────────────────────────────────────────────
    // Surname reading first; the table keeps every candidate because a name
    // index has no context to pick one.
    '曾' => &["ZENG", "CENG"],
    '单' => &["SHAN", "DAN", "CHAN"],
    '單' => &["SHAN", "DAN", "CHAN"],
    '乐' => &["LE", "YUE"],
    '樂' => &["LE", "YUE"],
    '区' => &["OU", "QU"],
    '區' => &["OU", "QU"],
    '仇' => &["QIU", "CHOU"],
    '解' => &["XIE", "JIE"],
    '查' => &["ZHA", "CHA"],
    '朴' => &["PIAO", "PU"],
    '覃' => &["QIN", "TAN"],
    '翟' => &["ZHAI", "DI"],
    '长' => &["CHANG", "ZHANG"],
    '長' => &["CHANG", "ZHANG"],
    '行' => &["XING", "HANG"],
    '重' => &["ZHONG", "CHONG"],
    '种' => &["CHONG", "ZHONG"],
    '折' => &["SHE", "ZHE"],
    '盖' => &["GAI", "GE"],
    '蓋' => &["GAI", "GE"],
    '和' => &["HE", "HUO"],
    '会' => &["HUI", "KUAI"],
    '會' => &["HUI", "KUAI"],
    '还' => &["HAI", "HUAN"],
    '還' => &["HAI", "HUAN"],
    '都' => &["DU", "DOU"],
    '参' => &["CAN", "SHEN"],
    '參' => &["CAN", "SHEN"],
    '省' => &["SHENG", "XING"],
    '传' => &["CHUAN", "ZHUAN"],
    '傳' => &["CHUAN", "ZHUAN"],
    '厦' => &["XIA", "SHA"],
    '廈' => &["XIA", "SHA"],
    '柏' => &["BAI", "BO"],
    '牟' => &["MOU", "MU"],
    '六' => &["LIU", "LU"],

    // ── A ────────────────────────────────────────────────────────────────────
    '阿' => &["A"], '艾' => &["AI"], '爱' => &["AI"], '愛' => &["AI"], '安' => &["AN"],

    // ── B ────────────────────────────────────────────────────────────────────
    '八' => &["BA"], '白' => &["BAI"], '百' => &["BAI"], '邦' => &["BANG"],
    '包' => &["BAO"], '宝' => &["BAO"], '寶' => &["BAO"], '鲍' => &["BAO"], '鮑' => &["BAO"],
    '贝' => &["BEI"], '貝' => &["BEI"], '毕' => &["BI"], '畢' => &["BI"],
    '彬' => &["BIN"], '斌' => &["BIN"], '冰' => &["BING"], '波' => &["BO"],

    // ── C ────────────────────────────────────────────────────────────────────
    '才' => &["CAI"], '蔡' => &["CAI"], '曹' => &["CAO"], '柴' => &["CHAI"],
    '常' => &["CHANG"], '超' => &["CHAO"], '陈' => &["CHEN"], '陳' => &["CHEN"],
    '程' => &["CHENG"], '成' => &["CHENG"], '川' => &["CHUAN"], '春' => &["CHUN"],
    '丛' => &["CONG"], '叢' => &["CONG"], '崔' => &["CUI"],

    // ── D ────────────────────────────────────────────────────────────────────
    '大' => &["DA"], '戴' => &["DAI"], '丹' => &["DAN"], '德' => &["DE"],
    '邓' => &["DENG"], '鄧' => &["DENG"], '迪' => &["DI"], '丁' => &["DING"],
    '东' => &["DONG"], '東' => &["DONG"], '董' => &["DONG"], '杜' => &["DU"],
    '段' => &["DUAN"],

    // ── E ────────────────────────────────────────────────────────────────────
    '鄂' => &["E"], '恩' => &["EN"], '儿' => &["ER"], '兒' => &["ER"], '二' => &["ER"],

    // ── F ────────────────────────────────────────────────────────────────────
    '范' => &["FAN"], '樊' => &["FAN"], '方' => &["FANG"], '房' => &["FANG"],
    '芳' => &["FANG"], '飞' => &["FEI"], '飛' => &["FEI"], '费' => &["FEI"],
    '費' => &["FEI"], '冯' => &["FENG"], '馮' => &["FENG"], '凤' => &["FENG"],
    '鳳' => &["FENG"], '风' => &["FENG"], '風' => &["FENG"], '福' => &["FU"],
    '傅' => &["FU"], '符' => &["FU"],

    // ── G ────────────────────────────────────────────────────────────────────
    '甘' => &["GAN"], '刚' => &["GANG"], '剛' => &["GANG"], '高' => &["GAO"],
    '葛' => &["GE"], '耿' => &["GENG"], '龚' => &["GONG"], '龔' => &["GONG"],
    '苟' => &["GOU"], '顾' => &["GU"], '顧' => &["GU"], '谷' => &["GU"],
    '关' => &["GUAN"], '關' => &["GUAN"], '管' => &["GUAN"], '光' => &["GUANG"],
    '桂' => &["GUI"], '国' => &["GUO"], '國' => &["GUO"], '郭' => &["GUO"],
    '过' => &["GUO"], '過' => &["GUO"],

    // ── H ────────────────────────────────────────────────────────────────────
    '海' => &["HAI"], '韩' => &["HAN"], '韓' => &["HAN"], '郝' => &["HAO"],
    '浩' => &["HAO"], '何' => &["HE"], '贺' => &["HE"], '賀' => &["HE"],
    '红' => &["HONG"], '紅' => &["HONG"], '洪' => &["HONG"], '侯' => &["HOU"],
    '胡' => &["HU"], '华' => &["HUA"], '華' => &["HUA"], '花' => &["HUA"],
    '黄' => &["HUANG"], '黃' => &["HUANG"], '辉' => &["HUI"], '輝' => &["HUI"],
    '慧' => &["HUI"], '霍' => &["HUO"],

    // ── J ────────────────────────────────────────────────────────────────────
    '吉' => &["JI"], '纪' => &["JI"], '紀' => &["JI"], '季' => &["JI"],
    '佳' => &["JIA"], '贾' => &["JIA"], '賈' => &["JIA"], '简' => &["JIAN"],
    '簡' => &["JIAN"], '健' => &["JIAN"], '建' => &["JIAN"], '江' => &["JIANG"],
    '姜' => &["JIANG"], '蒋' => &["JIANG"], '蔣' => &["JIANG"], '焦' => &["JIAO"],
    '杰' => &["JIE"], '傑' => &["JIE"], '洁' => &["JIE"], '潔' => &["JIE"],
    '金' => &["JIN"], '靳' => &["JIN"], '京' => &["JING"], '晶' => &["JING"],
    '静' => &["JING"], '靜' => &["JING"], '九' => &["JIU"], '娟' => &["JUAN"],
    '鹃' => &["JUAN"], '鵑' => &["JUAN"], '军' => &["JUN"], '軍' => &["JUN"],
    '俊' => &["JUN"],

    // ── K ────────────────────────────────────────────────────────────────────
    '凯' => &["KAI"], '凱' => &["KAI"], '康' => &["KANG"], '柯' => &["KE"],
    '孔' => &["KONG"], '坤' => &["KUN"],

    // ── L ────────────────────────────────────────────────────────────────────
    '赖' => &["LAI"], '賴' => &["LAI"], '兰' => &["LAN"], '蘭' => &["LAN"],
    '蓝' => &["LAN"], '藍' => &["LAN"], '雷' => &["LEI"], '磊' => &["LEI"],
    '李' => &["LI"], '黎' => &["LI"], '丽' => &["LI"], '麗' => &["LI"],
    '莉' => &["LI"], '力' => &["LI"], '连' => &["LIAN"], '連' => &["LIAN"],
    '梁' => &["LIANG"], '亮' => &["LIANG"], '廖' => &["LIAO"], '林' => &["LIN"],
    '琳' => &["LIN"], '凌' => &["LING"], '玲' => &["LING"], '刘' => &["LIU"],
    '劉' => &["LIU"], '柳' => &["LIU"], '龙' => &["LONG"], '龍' => &["LONG"],
    '卢' => &["LU"], '盧' => &["LU"], '陆' => &["LU"], '陸' => &["LU"],
    '鲁' => &["LU"], '魯' => &["LU"], '路' => &["LU"], '芦' => &["LU"],
    '蘆' => &["LU"], '吕' => &["LV"], '呂' => &["LV"], '罗' => &["LUO"],
    '羅' => &["LUO"], '骆' => &["LUO"], '駱' => &["LUO"],

    // ── M ────────────────────────────────────────────────────────────────────
    '马' => &["MA"], '馬' => &["MA"], '毛' => &["MAO"], '梅' => &["MEI"],
    '美' => &["MEI"], '蒙' => &["MENG"], '孟' => &["MENG"], '苗' => &["MIAO"],
    '敏' => &["MIN"], '民' => &["MIN"], '明' => &["MING"], '莫' => &["MO"],

    // ── N ────────────────────────────────────────────────────────────────────
    '娜' => &["NA"], '南' => &["NAN"], '倪' => &["NI"], '聂' => &["NIE"],
    '聶' => &["NIE"], '宁' => &["NING"], '寧' => &["NING"], '牛' => &["NIU"],

    // ── O ────────────────────────────────────────────────────────────────────
    '欧' => &["OU"], '歐' => &["OU"],

    // ── P ────────────────────────────────────────────────────────────────────
    '潘' => &["PAN"], '庞' => &["PANG"], '龐' => &["PANG"], '培' => &["PEI"],
    '裴' => &["PEI"], '彭' => &["PENG"], '鹏' => &["PENG"], '鵬' => &["PENG"],
    '平' => &["PING"], '萍' => &["PING"], '蒲' => &["PU"],

    // ── Q ────────────────────────────────────────────────────────────────────
    '七' => &["QI"], '齐' => &["QI"], '齊' => &["QI"], '祁' => &["QI"],
    '钱' => &["QIAN"], '錢' => &["QIAN"], '千' => &["QIAN"], '倩' => &["QIAN"],
    '强' => &["QIANG"], '強' => &["QIANG"], '乔' => &["QIAO"], '喬' => &["QIAO"],
    '秦' => &["QIN"], '琴' => &["QIN"], '青' => &["QING"], '庆' => &["QING"],
    '慶' => &["QING"], '邱' => &["QIU"], '屈' => &["QU"], '曲' => &["QU"],

    // ── R ────────────────────────────────────────────────────────────────────
    '冉' => &["RAN"], '饶' => &["RAO"], '饒' => &["RAO"], '任' => &["REN"],
    '日' => &["RI"], '荣' => &["RONG"], '榮' => &["RONG"], '容' => &["RONG"],
    '阮' => &["RUAN"], '瑞' => &["RUI"],

    // ── S ────────────────────────────────────────────────────────────────────
    '三' => &["SAN"], '森' => &["SEN"], '山' => &["SHAN"], '尚' => &["SHANG"],
    '邵' => &["SHAO"], '申' => &["SHEN"], '沈' => &["SHEN"], '盛' => &["SHENG"],
    '胜' => &["SHENG"], '勝' => &["SHENG"], '石' => &["SHI"], '史' => &["SHI"],
    '施' => &["SHI"], '十' => &["SHI"], '世' => &["SHI"], '书' => &["SHU"],
    '書' => &["SHU"], '舒' => &["SHU"], '水' => &["SHUI"], '四' => &["SI"],
    '宋' => &["SONG"], '苏' => &["SU"], '蘇' => &["SU"], '孙' => &["SUN"],
    '孫' => &["SUN"],

    // ── T ────────────────────────────────────────────────────────────────────
    '他' => &["TA"], '谭' => &["TAN"], '譚' => &["TAN"], '唐' => &["TANG"],
    '汤' => &["TANG"], '湯' => &["TANG"], '陶' => &["TAO"], '涛' => &["TAO"],
    '濤' => &["TAO"], '滕' => &["TENG"], '天' => &["TIAN"], '田' => &["TIAN"],
    '铁' => &["TIE"], '鐵' => &["TIE"], '婷' => &["TING"], '童' => &["TONG"],
    '涂' => &["TU"],

    // ── W ────────────────────────────────────────────────────────────────────
    '万' => &["WAN"], '萬' => &["WAN"], '婉' => &["WAN"], '汪' => &["WANG"],
    '王' => &["WANG"], '韦' => &["WEI"], '韋' => &["WEI"], '魏' => &["WEI"],
    '伟' => &["WEI"], '偉' => &["WEI"], '卫' => &["WEI"], '衛' => &["WEI"],
    '温' => &["WEN"], '溫' => &["WEN"], '文' => &["WEN"], '翁' => &["WENG"],
    '吴' => &["WU"], '吳' => &["WU"], '武' => &["WU"], '伍' => &["WU"],
    '五' => &["WU"],

    // ── X ────────────────────────────────────────────────────────────────────
    '西' => &["XI"], '喜' => &["XI"], '霞' => &["XIA"], '夏' => &["XIA"],
    '祥' => &["XIANG"], '香' => &["XIANG"], '向' => &["XIANG"], '小' => &["XIAO"],
    '晓' => &["XIAO"], '曉' => &["XIAO"], '肖' => &["XIAO"], '萧' => &["XIAO"],
    '蕭' => &["XIAO"], '谢' => &["XIE"], '謝' => &["XIE"], '心' => &["XIN"],
    '欣' => &["XIN"], '辛' => &["XIN"], '鑫' => &["XIN"], '邢' => &["XING"],
    '熊' => &["XIONG"], '秀' => &["XIU"], '徐' => &["XU"], '许' => &["XU"],
    '許' => &["XU"], '雪' => &["XUE"], '薛' => &["XUE"],

    // ── Y ────────────────────────────────────────────────────────────────────
    '雅' => &["YA"], '严' => &["YAN"], '嚴' => &["YAN"], '颜' => &["YAN"],
    '顏' => &["YAN"], '闫' => &["YAN"], '閆' => &["YAN"], '燕' => &["YAN"],
    '艳' => &["YAN"], '艷' => &["YAN"], '阳' => &["YANG"], '陽' => &["YANG"],
    '杨' => &["YANG"], '楊' => &["YANG"], '姚' => &["YAO"], '叶' => &["YE"],
    '葉' => &["YE"], '一' => &["YI"], '易' => &["YI"], '义' => &["YI"],
    '義' => &["YI"], '尹' => &["YIN"], '殷' => &["YIN"], '英' => &["YING"],
    '莹' => &["YING"], '瑩' => &["YING"], '勇' => &["YONG"], '永' => &["YONG"],
    '尤' => &["YOU"], '游' => &["YOU"], '友' => &["YOU"], '于' => &["YU"],
    '余' => &["YU"], '俞' => &["YU"], '郁' => &["YU"], '喻' => &["YU"],
    '玉' => &["YU"], '宇' => &["YU"], '袁' => &["YUAN"], '元' => &["YUAN"],
    '媛' => &["YUAN"], '月' => &["YUE"], '岳' => &["YUE"], '云' => &["YUN"],
    '雲' => &["YUN"],

    // ── Z ────────────────────────────────────────────────────────────────────
    '詹' => &["ZHAN"], '章' => &["ZHANG"], '张' => &["ZHANG"], '張' => &["ZHANG"],
    '赵' => &["ZHAO"], '趙' => &["ZHAO"], '珍' => &["ZHEN"], '真' => &["ZHEN"],
    '郑' => &["ZHENG"], '鄭' => &["ZHENG"], '正' => &["ZHENG"], '志' => &["ZHI"],
    '智' => &["ZHI"], '中' => &["ZHONG"], '钟' => &["ZHONG"], '鍾' => &["ZHONG"],
    '周' => &["ZHOU"], '朱' => &["ZHU"], '祝' => &["ZHU"], '庄' => &["ZHUANG"],
    '莊' => &["ZHUANG"], '梓' => &["ZI"], '紫' => &["ZI"], '邹' => &["ZOU"],
    '鄒' => &["ZOU"], '左' => &["ZUO"],
};
